//! Text notation for positions, tiles and actions.
//!
//! Positions are written as `(x, y)`, tiles by their kind string
//! (`RED`, `BLUE_CAPITAL`, `LETTER_Q`, ...), and actions as ordered lists of
//! positions.

use thiserror::Error;

use crate::board::{Color, Position, Tile};

/// Errors that can occur when parsing notation strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("malformed position '{0}', expected '(x, y)'")]
    MalformedPosition(String),

    #[error("unknown tile kind '{0}'")]
    UnknownTile(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

/// Formats a position as `(x, y)`.
pub fn format_position(pos: Position) -> String {
    pos.to_string()
}

/// Parses `(x, y)`. Whitespace around the coordinates is optional. The
/// result is not checked against the board shape.
pub fn parse_position(s: &str) -> Result<Position, NotationError> {
    let malformed = || NotationError::MalformedPosition(s.to_string());

    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut parts = inner.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let x: i32 = x.trim().parse().map_err(|_| malformed())?;
    let y: i32 = y.trim().parse().map_err(|_| malformed())?;
    Ok(Position::new(x, y))
}

/// Parses a tile kind string.
pub fn parse_tile(s: &str) -> Result<Tile, NotationError> {
    Tile::from_kind(s).ok_or_else(|| NotationError::UnknownTile(s.to_string()))
}

/// Parses `RED` or `BLUE`.
pub fn parse_color(s: &str) -> Result<Color, NotationError> {
    Color::from_name(s).ok_or_else(|| NotationError::UnknownColor(s.to_string()))
}

/// Formats an action as a space-separated list of positions.
pub fn format_action(action: &[Position]) -> String {
    action
        .iter()
        .map(|p| format_position(*p))
        .collect::<Vec<_>>()
        .join(" ")
}
