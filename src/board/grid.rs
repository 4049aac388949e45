//! Immutable board snapshot.
//!
//! A `Board` is a total mapping from every valid position to a tile, stored
//! as a fixed-size array indexed by `Position::index`. Boards are values:
//! every modification returns a new board and never touches the original.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use super::position::{
    adjacent_positions, valid_positions, Position, BLUE_START, POSITION_COUNT, RED_START,
    ROW_COUNT, ROW_RANGES,
};
use super::tile::{Color, Tile};
use crate::error::GameError;
use crate::letters::LetterSource;

/// Complete board contents at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [Tile; POSITION_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board where every position is empty.
    pub fn empty() -> Self {
        Board {
            tiles: [Tile::Empty; POSITION_COUNT],
        }
    }

    /// Builds a board from explicit entries; unspecified positions are empty.
    pub fn new<I>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (Position, Tile)>,
    {
        let mut board = Board::empty();
        for (pos, tile) in entries {
            let idx = pos.index().ok_or(GameError::InvalidPosition(pos))?;
            board.tiles[idx] = tile;
        }
        Ok(board)
    }

    /// The standard opening: both capitals on their start positions, each
    /// ringed by fresh letters.
    pub fn initial(letters: &mut impl LetterSource) -> Self {
        let mut board = Board::empty();
        for (start, color) in [(RED_START, Color::Red), (BLUE_START, Color::Blue)] {
            board.put(start, color.capital());
            for adj in adjacent_positions(start) {
                board.put(adj, Tile::Letter(letters.sample()));
            }
        }
        board
    }

    /// Writes a tile in place. Only for positions already known to be valid.
    pub(crate) fn put(&mut self, pos: Position, tile: Tile) {
        if let Some(idx) = pos.index() {
            self.tiles[idx] = tile;
        }
    }

    /// Returns the tile at `pos`.
    pub fn get_tile(&self, pos: Position) -> Result<Tile, GameError> {
        pos.index()
            .map(|idx| self.tiles[idx])
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// Returns a copy of this board with `pos` set to `tile`.
    pub fn set_tile(&self, pos: Position, tile: Tile) -> Result<Board, GameError> {
        let idx = pos.index().ok_or(GameError::InvalidPosition(pos))?;
        let mut next = self.clone();
        next.tiles[idx] = tile;
        Ok(next)
    }

    /// The letter at `pos`, or None if the tile is not a letter.
    pub fn get_letter(&self, pos: Position) -> Result<Option<char>, GameError> {
        Ok(self.get_tile(pos)?.letter())
    }

    /// Concatenates the letters at `positions` in order. Returns None if any
    /// of them is not a letter tile.
    pub fn get_word(&self, positions: &[Position]) -> Result<Option<String>, GameError> {
        let mut word = String::with_capacity(positions.len());
        for &pos in positions {
            match self.get_letter(pos)? {
                Some(c) => word.push(c),
                None => return Ok(None),
            }
        }
        Ok(Some(word))
    }

    /// Iterates `(position, tile)` over the whole board in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        valid_positions()
            .iter()
            .zip(self.tiles.iter())
            .map(|(&p, &t)| (p, t))
    }

    /// First position (in canonical order) holding `tile`.
    pub fn find_single(&self, tile: Tile) -> Option<Position> {
        self.iter().find(|&(_, t)| t == tile).map(|(p, _)| p)
    }

    /// All positions holding `tile`, in canonical order.
    pub fn find_all(&self, tile: Tile) -> Vec<Position> {
        self.find_all_matching(|_, t| t == tile)
    }

    /// All positions whose `(position, tile)` satisfies `predicate`.
    pub fn find_all_matching<F>(&self, mut predicate: F) -> Vec<Position>
    where
        F: FnMut(Position, Tile) -> bool,
    {
        self.iter()
            .filter(|&(p, t)| predicate(p, t))
            .map(|(p, _)| p)
            .collect()
    }

    /// Map of every letter position to its letter.
    pub fn find_all_letters(&self) -> HashMap<Position, char> {
        self.iter()
            .filter_map(|(p, t)| t.letter().map(|c| (p, c)))
            .collect()
    }

    /// Every tile owned by `color`, capital included.
    pub fn territory(&self, color: Color) -> Vec<Position> {
        self.find_all_matching(|_, t| t.is_territory_of(color))
    }

    pub fn capital(&self, color: Color) -> Option<Position> {
        self.find_single(color.capital())
    }

    pub fn red_capital(&self) -> Option<Position> {
        self.capital(Color::Red)
    }

    pub fn blue_capital(&self) -> Option<Position> {
        self.capital(Color::Blue)
    }

    /// Breadth-first traversal from `seeds`.
    ///
    /// Seeds are visited unconditionally. A neighbour is entered only if
    /// `predicate(position, tile)` holds for it. Returns every visited
    /// position, seeds included.
    pub fn floodfill<I, F>(&self, seeds: I, mut predicate: F) -> Result<HashSet<Position>, GameError>
    where
        I: IntoIterator<Item = Position>,
        F: FnMut(Position, Tile) -> bool,
    {
        let mut seen = [false; POSITION_COUNT];
        let mut queue = VecDeque::new();
        for seed in seeds {
            let idx = seed.index().ok_or(GameError::OutOfBounds(seed))?;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(seed);
            }
        }

        while let Some(pos) = queue.pop_front() {
            for adj in adjacent_positions(pos) {
                let Some(idx) = adj.index() else { continue };
                if seen[idx] {
                    continue;
                }
                if predicate(adj, self.tiles[idx]) {
                    seen[idx] = true;
                    queue.push_back(adj);
                }
            }
        }

        Ok(seen
            .iter()
            .enumerate()
            .filter(|(_, &s)| s)
            .map(|(i, _)| Position::from_index(i))
            .collect())
    }
}

/// Renders the board as offset rows of tile symbols. Each row is shifted
/// left by half a cell per row so axial neighbours line up visually.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROW_COUNT {
            let (lo, hi) = ROW_RANGES[y];
            let indent = (ROW_COUNT - 1 - y) + 2 * lo as usize;
            write!(f, "{:width$}", "", width = indent)?;
            for x in lo..=hi {
                let tile = self.tiles[Position::new(x, y as i32).index().unwrap_or(0)];
                write!(f, "{} ", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
