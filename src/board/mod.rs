//! Board representation.
//!
//! Contains the hex-grid geometry, tile types, the immutable board snapshot
//! and the capture rule applied when a word is played.

pub mod capture;
pub mod grid;
pub mod position;
pub mod tile;

pub use grid::Board;
pub use position::{
    adjacent_positions, valid, valid_positions, Position, ADJACENT_OFFSETS, ALL_POSITIONS,
    BLUE_START, POSITION_COUNT, RED_START, ROW_COUNT, ROW_RANGES,
};
pub use tile::{Color, Tile};
