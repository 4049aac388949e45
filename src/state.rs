//! Game state and turn progression.
//!
//! A `State` pairs a board with whose turn it is and the round counter. It
//! is a value: `act` returns the successor state and leaves `self` intact.
//! Each state carries its own letter generator, so replaying an action from
//! a historical state always draws the same letters.

use std::sync::Arc;

use crate::board::{Board, Color, Position};
use crate::dictionary::Dictionary;
use crate::error::{GameError, InvalidMove};
use crate::letters::LetterGenerator;

/// A snapshot of a game between two turns.
#[derive(Debug, Clone)]
pub struct State {
    pub board: Board,
    pub turn: Color,
    /// Starts at 1 and never decreases.
    pub round: u32,
    pub dictionary: Arc<Dictionary>,
    letters: LetterGenerator,
}

/// States compare by position: board, turn and round.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.turn == other.turn && self.round == other.round
    }
}

impl Eq for State {}

impl State {
    /// A state with Red to move in round 1.
    pub fn new(dictionary: Arc<Dictionary>, board: Board, letters: LetterGenerator) -> Self {
        State::from_parts(dictionary, board, letters, Color::Red, 1)
    }

    pub fn from_parts(
        dictionary: Arc<Dictionary>,
        board: Board,
        letters: LetterGenerator,
        turn: Color,
        round: u32,
    ) -> Self {
        State {
            board,
            turn,
            round,
            dictionary,
            letters,
        }
    }

    /// The opening state on the standard starting board.
    pub fn initial(dictionary: Arc<Dictionary>, mut letters: LetterGenerator) -> Self {
        let board = Board::initial(&mut letters);
        State::new(dictionary, board, letters)
    }

    /// Returns the winner once one side holds no territory at all.
    pub fn winner(&self) -> Option<Color> {
        if self.board.territory(Color::Red).is_empty() {
            Some(Color::Blue)
        } else if self.board.territory(Color::Blue).is_empty() {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Advances turn and round onto `board`.
    ///
    /// Capturing the enemy capital grants the same player another turn and
    /// starts a new round. Otherwise the turn passes, and the round advances
    /// when play returns to Red.
    pub fn next_turn(&self, board: Board, capital_captured: bool) -> State {
        self.advance(board, capital_captured, self.letters.clone())
    }

    /// Skips the current player's turn without touching the board.
    pub fn pass(&self) -> State {
        self.next_turn(self.board.clone(), false)
    }

    /// Plays the letters at `played`, in order, as a word.
    pub fn act(&self, played: &[Position]) -> Result<State, GameError> {
        let word = match self.board.get_word(played)? {
            Some(word) => word,
            None => return Err(self.not_a_letter(played)),
        };
        if !self.dictionary.contains(&word) {
            return Err(InvalidMove::NotAWord(word).into());
        }

        let enemy = self.turn.opponent();
        let enemy_had_capital = self.board.capital(enemy).is_some();

        let mut letters = self.letters.clone();
        let (mut board, capital_captured) = self.board.use_tiles(played, self.turn, &mut letters)?;

        // A side without a capital gets one back on a surviving tile.
        if !enemy_had_capital {
            let spots = board.find_all(enemy.territory());
            if let Some(i) = letters.pick_index(spots.len()) {
                board = board.set_tile(spots[i], enemy.capital())?;
            }
        }

        Ok(self.advance(board, capital_captured, letters))
    }

    fn advance(&self, board: Board, capital_captured: bool, letters: LetterGenerator) -> State {
        let next_round = self.round.saturating_add(1);
        let (turn, round) = if capital_captured {
            (self.turn, next_round)
        } else if self.turn == Color::Blue {
            (Color::Red, next_round)
        } else {
            (Color::Blue, self.round)
        };
        State::from_parts(self.dictionary.clone(), board, letters, turn, round)
    }

    /// Builds the error for the first played position that is not a letter.
    fn not_a_letter(&self, played: &[Position]) -> GameError {
        for &position in played {
            match self.board.get_tile(position) {
                Ok(tile) if tile.letter().is_none() => {
                    return InvalidMove::NotALetter { position, tile }.into();
                }
                Err(e) => return e,
                Ok(_) => {}
            }
        }
        InvalidMove::NotAWord(String::new()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words(["a", "ab", "abc", "abcd"]))
    }

    fn state_with(tiles: &[((i32, i32), Tile)]) -> State {
        let board = Board::new(tiles.iter().map(|&((x, y), t)| (p(x, y), t))).unwrap();
        State::new(dictionary(), board, LetterGenerator::seeded(17))
    }

    #[test]
    fn next_turn_alternates_and_counts_rounds() {
        let state = State::initial(dictionary(), LetterGenerator::seeded(1));
        assert_eq!(state.turn, Color::Red);
        assert_eq!(state.round, 1);

        let state = state.next_turn(state.board.clone(), false);
        assert_eq!(state.turn, Color::Blue);
        assert_eq!(state.round, 1);

        let state = state.next_turn(state.board.clone(), false);
        assert_eq!(state.turn, Color::Red);
        assert_eq!(state.round, 2);
    }

    #[test]
    fn capital_capture_keeps_turn_and_bumps_round() {
        let state = State::initial(dictionary(), LetterGenerator::seeded(1));

        let state = state.next_turn(state.board.clone(), true);
        assert_eq!(state.turn, Color::Red);
        assert_eq!(state.round, 2);

        let state = state.next_turn(state.board.clone(), true);
        assert_eq!(state.turn, Color::Red);
        assert_eq!(state.round, 3);
    }

    #[test]
    fn round_counter_saturates() {
        let board = Board::initial(&mut LetterGenerator::seeded(1));
        let state = State::from_parts(
            dictionary(),
            board,
            LetterGenerator::seeded(1),
            Color::Blue,
            u32::MAX,
        );
        assert_eq!(state.pass().round, u32::MAX);
        assert_eq!(state.next_turn(state.board.clone(), true).round, u32::MAX);
    }

    #[test]
    fn pass_keeps_board() {
        let state = State::initial(dictionary(), LetterGenerator::seeded(1));
        let passed = state.pass();
        assert_eq!(passed.board, state.board);
        assert_eq!(passed.turn, Color::Blue);
    }

    #[test]
    fn red_wins_by_taking_last_blue_tile() {
        let state = state_with(&[
            ((2, 2), Tile::RedCapital),
            ((2, 3), Tile::BlueCapital),
            ((3, 3), Tile::Letter('A')),
            ((5, 5), Tile::Letter('A')),
        ]);
        assert_eq!(state.winner(), None);

        let red_win = state.act(&[p(3, 3)]).unwrap();
        assert_eq!(red_win.winner(), Some(Color::Red));
    }

    #[test]
    fn blue_wins_after_red_wastes_turn() {
        let state = state_with(&[
            ((2, 2), Tile::RedCapital),
            ((2, 3), Tile::BlueCapital),
            ((3, 3), Tile::Letter('A')),
            ((5, 5), Tile::Letter('A')),
        ]);

        let blue_win = state.act(&[p(5, 5)]).unwrap().act(&[p(3, 3)]).unwrap();
        assert_eq!(blue_win.winner(), Some(Color::Blue));
    }

    #[test]
    fn capture_grants_extra_turn_then_capital_respawns() {
        let state = state_with(&[
            ((2, 2), Tile::RedCapital),
            ((1, 1), Tile::Red),
            ((3, 3), Tile::Letter('A')),
            ((4, 4), Tile::BlueCapital),
            ((5, 5), Tile::Blue),
            ((3, 5), Tile::Letter('A')),
        ]);

        let after_capture = state.act(&[p(3, 3)]).unwrap();
        assert_eq!(after_capture.turn, Color::Red);
        assert_eq!(after_capture.round, 2);
        assert!(after_capture.board.get_letter(p(4, 4)).unwrap().is_some());
        assert_eq!(after_capture.board.blue_capital(), None);

        let after_waste = after_capture.act(&[p(3, 5)]).unwrap();
        assert_eq!(after_waste.board.blue_capital(), Some(p(5, 5)));
        assert_eq!(after_waste.turn, Color::Blue);
    }

    #[test]
    fn rejects_non_letter_and_unknown_word() {
        let state = state_with(&[
            ((2, 2), Tile::RedCapital),
            ((3, 3), Tile::Letter('Z')),
            ((3, 2), Tile::Letter('A')),
        ]);

        assert_eq!(
            state.act(&[p(3, 2), p(2, 2)]),
            Err(GameError::InvalidMove(InvalidMove::NotALetter {
                position: p(2, 2),
                tile: Tile::RedCapital,
            }))
        );
        assert_eq!(
            state.act(&[p(3, 3)]),
            Err(GameError::InvalidMove(InvalidMove::NotAWord("Z".to_string())))
        );
        assert_eq!(state.act(&[p(-1, 2)]), Err(GameError::OutOfBounds(p(-1, 2))));
    }

    #[test]
    fn act_leaves_original_untouched() {
        let state = state_with(&[((2, 2), Tile::RedCapital), ((3, 2), Tile::Letter('A'))]);
        let before = state.board.clone();
        let next = state.act(&[p(3, 2)]).unwrap();
        assert_eq!(state.board, before);
        assert_ne!(next.board, before);
    }

    #[test]
    fn act_is_reproducible_from_same_state() {
        let state = state_with(&[((2, 2), Tile::RedCapital), ((3, 2), Tile::Letter('A'))]);
        let first = state.act(&[p(3, 2)]).unwrap();
        let second = state.act(&[p(3, 2)]).unwrap();
        assert_eq!(first, second);
    }
}
