//! Board geometry for the Capitals hex grid.
//!
//! Positions use axial coordinates: X runs up and to the right, Y runs
//! straight down, and (0, 0) is the upper-left corner. Each row has a fixed
//! inclusive X range; together the rows form a hexagon-shaped board.
//!
//! Every valid position maps to a dense index in `0..POSITION_COUNT`
//! (row-major, Y ascending then X ascending), which is the order used by all
//! board scans.

use std::fmt;

/// Number of rows on the board.
pub const ROW_COUNT: usize = 9;

/// Inclusive X range for each row, indexed by Y.
pub const ROW_RANGES: [(i32, i32); ROW_COUNT] = [
    (0, 1),
    (0, 3),
    (0, 5),
    (0, 6),
    (0, 6),
    (0, 6),
    (1, 6),
    (3, 6),
    (5, 6),
];

/// Number of valid positions on the board.
pub const POSITION_COUNT: usize = count_positions();

/// Axial offsets to the six neighbours of a tile.
pub const ADJACENT_OFFSETS: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (1, 1), (-1, -1)];

/// Starting position of the red capital.
pub const RED_START: Position = Position::new(1, 1);

/// Starting position of the blue capital.
pub const BLUE_START: Position = Position::new(5, 7);

/// A board coordinate in axial form. May be out of bounds; use
/// [`Position::is_valid`] or [`Position::index`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns true if the position lies inside the board.
    pub const fn is_valid(self) -> bool {
        if self.y < 0 || self.y >= ROW_COUNT as i32 {
            return false;
        }
        let (lo, hi) = ROW_RANGES[self.y as usize];
        self.x >= lo && self.x <= hi
    }

    /// Dense board index of this position, or None if it is off the board.
    pub const fn index(self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        let row = self.y as usize;
        Some(ROW_STARTS[row] + (self.x - ROW_RANGES[row].0) as usize)
    }

    /// Inverse of [`Position::index`]. Panics if `idx >= POSITION_COUNT`.
    pub fn from_index(idx: usize) -> Position {
        ALL_POSITIONS[idx]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

const fn count_positions() -> usize {
    let mut total = 0;
    let mut y = 0;
    while y < ROW_COUNT {
        total += (ROW_RANGES[y].1 - ROW_RANGES[y].0 + 1) as usize;
        y += 1;
    }
    total
}

const fn row_starts() -> [usize; ROW_COUNT] {
    let mut starts = [0usize; ROW_COUNT];
    let mut y = 1;
    while y < ROW_COUNT {
        let (lo, hi) = ROW_RANGES[y - 1];
        starts[y] = starts[y - 1] + (hi - lo + 1) as usize;
        y += 1;
    }
    starts
}

const fn all_positions() -> [Position; POSITION_COUNT] {
    let mut out = [Position::new(0, 0); POSITION_COUNT];
    let mut i = 0;
    let mut y = 0;
    while y < ROW_COUNT {
        let (lo, hi) = ROW_RANGES[y];
        let mut x = lo;
        while x <= hi {
            out[i] = Position::new(x, y as i32);
            i += 1;
            x += 1;
        }
        y += 1;
    }
    out
}

/// Index of the first position of each row.
const ROW_STARTS: [usize; ROW_COUNT] = row_starts();

/// All valid positions in canonical (row-major) order.
pub static ALL_POSITIONS: [Position; POSITION_COUNT] = all_positions();

/// Returns true if the position lies inside the board.
pub fn valid(pos: Position) -> bool {
    pos.is_valid()
}

/// All valid positions in canonical order.
pub fn valid_positions() -> &'static [Position] {
    &ALL_POSITIONS
}

/// The in-bounds neighbours of `pos`, in offset order.
pub fn adjacent_positions(pos: Position) -> impl Iterator<Item = Position> {
    ADJACENT_OFFSETS
        .iter()
        .filter_map(move |&(dx, dy)| {
            let (x, y) = pos.x.checked_add(dx).zip(pos.y.checked_add(dy))?;
            Some(Position::new(x, y))
        })
        .filter(|p| p.is_valid())
}
