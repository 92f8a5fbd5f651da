//! Per-color eye-space annotations.
//!
//! Each color keeps its own view of the board: which points are its eye
//! space, and which of those the connection analysis has marked as cutting
//! points, marginal, or closed to connections.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, ColorMap, Point};

/// Annotation of one point in one color's eye space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyePoint {
    /// Color whose eye space this point is, `Empty` if none.
    pub owner: Color,
    /// A cutting point of the owner's stones.
    pub cut: bool,
    /// Eye space that may not become a real eye.
    pub marginal: bool,
    /// Dragons must not be amalgamated through this point.
    pub inhibit_connection: bool,
}

/// One color's eye-space annotations for every point on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeSpace {
    size: u8,
    points: Vec<EyePoint>,
}

impl EyeSpace {
    /// Create unannotated eye space for a board size.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            points: vec![EyePoint::default(); size as usize * size as usize],
        }
    }

    /// Seed ownership from the board for one color.
    ///
    /// An empty point is `color`'s eye space when at least one neighbor is a
    /// `color` stone and none is an opponent stone. This is a coarse domain
    /// estimate for callers that do not bring their own.
    #[must_use]
    pub fn from_board(board: &Board, color: Color) -> Self {
        let mut space = Self::new(board.size());
        let enemy = color.opponent();

        for point in board.points().filter(|&p| board.is_empty(p)) {
            let mut friendly = false;
            let mut hostile = false;
            for next in board.neighbors(point) {
                match board.get(next) {
                    c if c == color => friendly = true,
                    c if c == enemy => hostile = true,
                    _ => {}
                }
            }
            if friendly && !hostile {
                space.set_owner(point, color);
            }
        }

        space
    }

    /// Annotation at a point.
    ///
    /// Panics if the point is off the board.
    #[must_use]
    pub fn get(&self, point: Point) -> &EyePoint {
        &self.points[self.checked_index(point)]
    }

    /// Check if a point is eye space of `color`.
    #[must_use]
    pub fn is_owned_by(&self, point: Point, color: Color) -> bool {
        color.is_stone() && self.get(point).owner == color
    }

    /// Set the owning color of a point.
    pub fn set_owner(&mut self, point: Point, owner: Color) {
        self.point_mut(point).owner = owner;
    }

    /// Mark a cutting point: sets `cut` and `inhibit_connection`.
    ///
    /// Returns how many of the two flags were newly set.
    pub fn mark_cut(&mut self, point: Point) -> usize {
        let eye = self.point_mut(point);
        let changed = usize::from(!eye.cut) + usize::from(!eye.inhibit_connection);
        eye.cut = true;
        eye.inhibit_connection = true;
        changed
    }

    /// Mark a point marginal. Returns `true` if the flag was newly set.
    pub fn mark_marginal(&mut self, point: Point) -> bool {
        let eye = self.point_mut(point);
        !std::mem::replace(&mut eye.marginal, true)
    }

    /// Close a point to connections. Returns `true` if the flag was newly set.
    pub fn inhibit_connection(&mut self, point: Point) -> bool {
        let eye = self.point_mut(point);
        !std::mem::replace(&mut eye.inhibit_connection, true)
    }

    /// All points marked as cutting points.
    pub fn cut_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.annotated(|eye| eye.cut)
    }

    /// All points closed to connections.
    pub fn inhibited_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.annotated(|eye| eye.inhibit_connection)
    }

    /// Clear the analysis flags, keeping ownership.
    pub fn clear_marks(&mut self) {
        for eye in &mut self.points {
            *eye = EyePoint {
                owner: eye.owner,
                ..EyePoint::default()
            };
        }
    }

    fn annotated(&self, flag: impl Fn(&EyePoint) -> bool + 'static) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, eye)| flag(*eye))
            .map(move |(i, _)| Point::from_index(i, size))
    }

    fn point_mut(&mut self, point: Point) -> &mut EyePoint {
        let index = self.checked_index(point);
        &mut self.points[index]
    }

    fn checked_index(&self, point: Point) -> usize {
        assert!(point.is_on_board(self.size), "{} is off the board", point);
        point.index(self.size)
    }
}

/// Eye space for both colors.
pub type EyeMaps = ColorMap<EyeSpace>;

/// Eye space for both colors, ownership seeded from the board.
#[must_use]
pub fn eye_maps_from_board(board: &Board) -> EyeMaps {
    ColorMap::new(|color| EyeSpace::from_board(board, color))
}
