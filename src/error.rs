//! Error kinds raised by the board, state and log layers.

use thiserror::Error;

use crate::board::{Position, Tile};

/// Failures from board queries, board construction and move application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate outside the board was queried or played.
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    /// A coordinate outside the board was used to build or modify a board.
    #[error("invalid board position {0}")]
    InvalidPosition(Position),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
}

/// Why a submitted move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("position {position} holds {tile}, not a letter")]
    NotALetter { position: Position, tile: Tile },

    #[error("'{0}' is not in the dictionary")]
    NotAWord(String),
}
