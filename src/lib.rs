//! Capitals rules engine library.
//!
//! Exposes the board representation, game state, move log and replay
//! format, plus a match runner, for use by the binaries, integration tests
//! and external agents.

pub mod agent;
pub mod board;
pub mod dictionary;
pub mod error;
pub mod game_log;
pub mod letters;
pub mod protocol;
pub mod runner;
pub mod state;

pub use board::{Board, Color, Position, Tile};
pub use dictionary::Dictionary;
pub use error::{GameError, InvalidMove};
pub use game_log::{Action, GameLog};
pub use letters::{LetterGenerator, LetterSource};
pub use state::State;
