//! Tile contents and player colors.

use std::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// The other player.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Plain territory tile owned by this color.
    pub const fn territory(self) -> Tile {
        match self {
            Color::Red => Tile::Red,
            Color::Blue => Tile::Blue,
        }
    }

    /// Capital tile owned by this color.
    pub const fn capital(self) -> Tile {
        match self {
            Color::Red => Tile::RedCapital,
            Color::Blue => Tile::BlueCapital,
        }
    }

    /// Upper-case name used in logs and notation.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
        }
    }

    /// Parses `"RED"` or `"BLUE"`.
    pub fn from_name(s: &str) -> Option<Color> {
        match s {
            "RED" => Some(Color::Red),
            "BLUE" => Some(Color::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    /// A playable letter; always an ASCII uppercase character.
    Letter(char),
    Red,
    Blue,
    RedCapital,
    BlueCapital,
}

const LETTER_PREFIX: &str = "LETTER_";

impl Tile {
    /// The letter on this tile, if it is a letter tile.
    pub const fn letter(self) -> Option<char> {
        match self {
            Tile::Letter(c) => Some(c),
            _ => None,
        }
    }

    /// The player owning this tile (plain territory or capital).
    pub const fn owner(self) -> Option<Color> {
        match self {
            Tile::Red | Tile::RedCapital => Some(Color::Red),
            Tile::Blue | Tile::BlueCapital => Some(Color::Blue),
            Tile::Empty | Tile::Letter(_) => None,
        }
    }

    /// True for the plain tile or the capital of `color`.
    pub fn is_territory_of(self, color: Color) -> bool {
        self.owner() == Some(color)
    }

    /// Serialized tile-kind string, e.g. `"RED_CAPITAL"` or `"LETTER_Q"`.
    pub fn kind(self) -> String {
        match self {
            Tile::Empty => "EMPTY".to_string(),
            Tile::Letter(c) => format!("{}{}", LETTER_PREFIX, c),
            Tile::Red => "RED".to_string(),
            Tile::Blue => "BLUE".to_string(),
            Tile::RedCapital => "RED_CAPITAL".to_string(),
            Tile::BlueCapital => "BLUE_CAPITAL".to_string(),
        }
    }

    /// Parses a tile-kind string. Letter kinds must carry exactly one
    /// uppercase ASCII letter.
    pub fn from_kind(s: &str) -> Option<Tile> {
        match s {
            "EMPTY" => Some(Tile::Empty),
            "RED" => Some(Tile::Red),
            "BLUE" => Some(Tile::Blue),
            "RED_CAPITAL" => Some(Tile::RedCapital),
            "BLUE_CAPITAL" => Some(Tile::BlueCapital),
            _ => {
                let rest = s.strip_prefix(LETTER_PREFIX)?;
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => Some(Tile::Letter(c)),
                    _ => None,
                }
            }
        }
    }

    /// Single-character symbol for text rendering.
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Letter(c) => c,
            Tile::Red => 'r',
            Tile::Blue => 'b',
            Tile::RedCapital => '@',
            Tile::BlueCapital => '#',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind())
    }
}
