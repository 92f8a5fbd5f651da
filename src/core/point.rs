//! Board coordinates, pattern offsets, and the eight board symmetries.
//!
//! ## Coordinates
//!
//! A `Point` is a (row, col) pair, row 0 at the top. Points carry no board
//! size; anything that crosses the board edge goes through a method taking
//! `size` and returns `None` when it falls off.
//!
//! ## Transforms
//!
//! Patterns are stored in one orientation and matched in all eight. A
//! `Transform` is one of the rotations/reflections of the square; the
//! position of a pattern element on the board is
//! `anchor + transform.apply(offset)`.
//!
//! ```
//! use go_connections::core::{Offset, Point, Transform};
//!
//! let anchor = Point::new(4, 4);
//! let offset = Offset::new(0, 1);
//!
//! assert_eq!(anchor.offset(Transform::IDENTITY.apply(offset), 9), Some(Point::new(4, 5)));
//! assert_eq!(
//!     anchor.offset(Transform::new(2).apply(offset), 9),
//!     Some(Point::new(4, 3)),
//! );
//! ```

use serde::{Deserialize, Serialize};

/// A point on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    /// Create a point from row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Linear index on a board of the given size (row-major).
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Inverse of [`Point::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: u8) -> Self {
        Self {
            row: (index / size as usize) as u8,
            col: (index % size as usize) as u8,
        }
    }

    /// Check if this point lies on a board of the given size.
    #[must_use]
    pub const fn is_on_board(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Displace this point by an offset.
    ///
    /// Returns `None` if the result is off a board of the given size.
    #[must_use]
    pub fn offset(self, offset: Offset, size: u8) -> Option<Point> {
        let row = i16::from(self.row) + i16::from(offset.drow);
        let col = i16::from(self.col) + i16::from(offset.dcol);
        let size = i16::from(size);

        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Point::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Orthogonal neighbors on a board of the given size.
    pub fn neighbors(self, size: u8) -> impl Iterator<Item = Point> {
        Offset::ORTHOGONAL
            .into_iter()
            .filter_map(move |d| self.offset(d, size))
    }

    /// Standard Go vertex name (columns skip `I`, rows count from the bottom).
    ///
    /// ```
    /// use go_connections::core::Point;
    ///
    /// assert_eq!(Point::new(0, 0).vertex(19), "A19");
    /// assert_eq!(Point::new(18, 8).vertex(19), "J1");
    /// ```
    #[must_use]
    pub fn vertex(self, size: u8) -> String {
        const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
        let letter = COLUMNS
            .get(self.col as usize)
            .map_or('?', |&c| c as char);
        format!("{}{}", letter, i16::from(size) - i16::from(self.row))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({},{})", self.row, self.col)
    }
}

/// A displacement relative to a pattern anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub drow: i8,
    pub dcol: i8,
}

impl Offset {
    /// The anchor itself.
    pub const ZERO: Offset = Offset::new(0, 0);

    /// Up, right, down, left.
    pub const ORTHOGONAL: [Offset; 4] = [
        Offset::new(-1, 0),
        Offset::new(0, 1),
        Offset::new(1, 0),
        Offset::new(0, -1),
    ];

    /// Create a new offset.
    #[must_use]
    pub const fn new(drow: i8, dcol: i8) -> Self {
        Self { drow, dcol }
    }

    /// The same displacement pointing the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(-self.drow, -self.dcol)
    }
}

/// The eight transforms of the square, as `[[a, b], [c, d]]` row/col matrices.
const MATRICES: [[i8; 4]; 8] = [
    [1, 0, 0, 1],   // identity
    [0, 1, -1, 0],  // rotate 90
    [-1, 0, 0, -1], // rotate 180
    [0, -1, 1, 0],  // rotate 270
    [0, -1, -1, 0], // anti-diagonal mirror
    [-1, 0, 0, 1],  // vertical flip
    [0, 1, 1, 0],   // diagonal mirror
    [1, 0, 0, -1],  // horizontal flip
];

/// One of the eight board symmetries.
///
/// Identified by index `0..8`: `0..4` are rotations, `4..8` reflections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform(u8);

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform(0);

    /// Number of distinct transforms.
    pub const COUNT: usize = 8;

    /// Create a transform by index.
    ///
    /// Panics if `index >= 8`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::COUNT as u8, "Transform index out of range");
        Self(index)
    }

    /// All eight transforms, identity first.
    pub fn all() -> impl Iterator<Item = Transform> {
        (0..Self::COUNT as u8).map(Transform)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Apply this transform to an offset.
    #[must_use]
    pub const fn apply(self, offset: Offset) -> Offset {
        let [a, b, c, d] = MATRICES[self.0 as usize];
        Offset::new(
            a * offset.drow + b * offset.dcol,
            c * offset.drow + d * offset.dcol,
        )
    }

    /// The transform that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self.0 {
            1 => Transform(3),
            3 => Transform(1),
            other => Transform(other),
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
