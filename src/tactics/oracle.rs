//! Tactical oracle interface.
//!
//! The connection analysis never reads tactics itself. It asks an oracle
//! whether a move is safe, whether a move defends a stone, and what the
//! attack result against a stone is.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Point};

/// Result of reading an attack on a worm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackCode {
    /// The worm cannot be captured.
    #[default]
    None,
    /// The worm can be captured outright.
    Win,
    /// Capture by a ko the attacker takes first.
    KoA,
    /// Capture by a ko the attacker must win first.
    KoB,
}

impl AttackCode {
    /// Capturable without ko.
    #[must_use]
    pub const fn is_capturable(self) -> bool {
        matches!(self, AttackCode::Win)
    }

    /// No attack works, not even through ko.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, AttackCode::None)
    }
}

/// Source of tactical reading results.
///
/// All points passed in must be on the board; implementations may panic
/// otherwise.
pub trait TacticalOracle {
    /// Can `color` play at `point` without the new stone being capturable?
    fn is_move_safe(&self, point: Point, color: Color) -> bool;

    /// Does playing `mv` defend the worm at `target`?
    fn does_defend(&self, mv: Point, target: Point) -> bool;

    /// Attack result against the worm at `point`.
    fn attack_code(&self, point: Point) -> AttackCode;
}

impl<T: TacticalOracle + ?Sized> TacticalOracle for &T {
    fn is_move_safe(&self, point: Point, color: Color) -> bool {
        (**self).is_move_safe(point, color)
    }

    fn does_defend(&self, mv: Point, target: Point) -> bool {
        (**self).does_defend(mv, target)
    }

    fn attack_code(&self, point: Point) -> AttackCode {
        (**self).attack_code(point)
    }
}
