//! Stone colors and per-color data storage.
//!
//! ## Color
//!
//! The contents of a board point: empty, black, or white.
//!
//! ## ColorMap
//!
//! One value per playing color, indexed by `Color`. Indexing with
//! `Color::Empty` is a programming error and panics.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Contents of a board point, or the side a value belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Empty,
    Black,
    White,
}

impl Color {
    /// Both playing colors, black first.
    pub const STONES: [Color; 2] = [Color::Black, Color::White];

    /// The other playing color. `Empty` maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    /// Check if this is a stone color.
    #[must_use]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// Diagram character: `X` black, `O` white, `.` empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
            Color::Empty => '.',
        }
    }

    /// Parse a board diagram character.
    ///
    /// Accepts `X`/`O` for stones and `.`/`+` for empty points.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Color> {
        match ch {
            'X' => Some(Color::Black),
            'O' => Some(Color::White),
            '.' | '+' => Some(Color::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Per-color data storage.
///
/// ```
/// use go_connections::core::{Color, ColorMap};
///
/// let mut captures: ColorMap<u32> = ColorMap::with_value(0);
/// captures[Color::White] += 3;
///
/// assert_eq!(captures[Color::Black], 0);
/// assert_eq!(captures[Color::White], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    black: T,
    white: T,
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            black: factory(Color::Black),
            white: factory(Color::White),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to one color's data.
    ///
    /// Panics on `Color::Empty`.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
            Color::Empty => panic!("ColorMap indexed with Color::Empty"),
        }
    }

    /// Get a mutable reference to one color's data.
    ///
    /// Panics on `Color::Empty`.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
            Color::Empty => panic!("ColorMap indexed with Color::Empty"),
        }
    }

    /// Iterate over (Color, &T) pairs, black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Black, &self.black), (Color::White, &self.white)].into_iter()
    }

    /// Iterate over (Color, &mut T) pairs, black first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        [(Color::Black, &mut self.black), (Color::White, &mut self.white)].into_iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
