//! Text formats for games.
//!
//! Position and tile notation, and the JSON replay document used to save
//! and restore game logs.

pub mod notation;
pub mod replay;

pub use notation::{format_action, format_position, parse_color, parse_position, parse_tile, NotationError};
pub use replay::{decode_log, encode_log, LogDocument, LogError, StateDocument};
