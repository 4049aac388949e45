//! Territory capture: turning a played word into owned tiles.
//!
//! Played tiles that connect to the player's territory (directly, or through
//! other played tiles) become territory. Every neighbour of a newly claimed
//! tile that is empty or enemy-owned is replaced with a fresh letter, which
//! is how enemy territory and the enemy capital are captured. Played tiles
//! with no connection are simply replaced with fresh letters.
//!
//! Played positions and neighbours are processed in canonical board order,
//! so the result does not depend on the order the positions were submitted.

use super::grid::Board;
use super::position::{adjacent_positions, Position, POSITION_COUNT};
use super::tile::{Color, Tile};
use crate::error::{GameError, InvalidMove};
use crate::letters::LetterSource;

impl Board {
    /// Applies a played set of letter tiles for `player`.
    ///
    /// Returns the new board and whether the enemy capital was captured.
    pub fn use_tiles(
        &self,
        played: &[Position],
        player: Color,
        letters: &mut impl LetterSource,
    ) -> Result<(Board, bool), GameError> {
        let mut is_played = [false; POSITION_COUNT];
        for &pos in played {
            let tile = self.get_tile(pos)?;
            if tile.letter().is_none() {
                return Err(InvalidMove::NotALetter { position: pos, tile }.into());
            }
            // get_tile succeeded, so the index exists.
            if let Some(idx) = pos.index() {
                is_played[idx] = true;
            }
        }

        let connected = self.connected_tiles(&is_played, player)?;

        let enemy = player.opponent();
        let mut result = self.clone();
        let mut capital_captured = false;

        for idx in (0..POSITION_COUNT).filter(|&i| is_played[i]) {
            let pos = Position::from_index(idx);
            if !connected[idx] {
                result.put(pos, Tile::Letter(letters.sample()));
                continue;
            }

            result.put(pos, player.territory());
            for adj in adjacent_positions(pos) {
                let neighbour = result.get_tile(adj)?;
                if neighbour == enemy.capital() {
                    capital_captured = true;
                    result.put(adj, Tile::Letter(letters.sample()));
                } else if neighbour == enemy.territory() || neighbour == Tile::Empty {
                    result.put(adj, Tile::Letter(letters.sample()));
                }
            }
        }

        Ok((result, capital_captured))
    }

    /// Marks which played tiles reach `player`'s territory.
    ///
    /// Each unclassified played tile seeds a flood-fill that may pass through
    /// the player's territory and through other played tiles. All played
    /// tiles in that component share one verdict: connected iff the
    /// component touches territory.
    fn connected_tiles(
        &self,
        is_played: &[bool; POSITION_COUNT],
        player: Color,
    ) -> Result<[bool; POSITION_COUNT], GameError> {
        let mut connected = [false; POSITION_COUNT];
        let mut classified = [false; POSITION_COUNT];

        for idx in 0..POSITION_COUNT {
            if !is_played[idx] || classified[idx] {
                continue;
            }

            let component = self.floodfill([Position::from_index(idx)], |p, t| {
                t.is_territory_of(player) || p.index().is_some_and(|i| is_played[i])
            })?;

            let touches_territory = component
                .iter()
                .any(|&p| self.get_tile(p).is_ok_and(|t| t.is_territory_of(player)));

            for p in component {
                if let Some(i) = p.index() {
                    if is_played[i] {
                        classified[i] = true;
                        connected[i] = touches_territory;
                    }
                }
            }
        }

        Ok(connected)
    }
}
