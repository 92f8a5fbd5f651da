//! Pattern matching interface.
//!
//! A matcher finds every place a database pattern occurs on the board and
//! reports each occurrence through a callback. The connection analysis only
//! consumes these reports; [`ScanMatcher`] is a straightforward matcher for
//! callers without their own.

mod scan;

pub use scan::ScanMatcher;

use crate::core::{Board, Color, Offset, Point, Transform};
use crate::patterns::{ElementAttribute, MatchSite, Pattern, PatternDatabase};

/// Which stones a matcher starts its search from.
///
/// Both modes find the same occurrences and report them the same way, with
/// `anchor` at the pattern's origin. They differ in which stones are tried:
/// under [`AnchorOther`](AnchorMode::AnchorOther) a pattern is only reached
/// through its first enemy element, so patterns without one never match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnchorMode {
    /// Start from stones of the matched color, at the pattern origin.
    #[default]
    AnchorColor,
    /// Start from stones of the opponent, at the first enemy element.
    AnchorOther,
}

impl AnchorMode {
    /// Color to match for, given the color of the stone searched from.
    #[must_use]
    pub fn matched_color(self, stone: Color) -> Color {
        match self {
            AnchorMode::AnchorColor => stone,
            AnchorMode::AnchorOther => stone.opponent(),
        }
    }

    /// Pattern offset that sits on the stone searched from.
    ///
    /// `None` if the pattern cannot be reached in this mode.
    #[must_use]
    pub fn pivot(self, pattern: &Pattern) -> Option<Offset> {
        match self {
            AnchorMode::AnchorColor => Some(Offset::ZERO),
            AnchorMode::AnchorOther => pattern
                .elements_with(ElementAttribute::Enemy)
                .next()
                .map(|element| element.offset),
        }
    }
}

/// One reported pattern occurrence.
#[derive(Clone, Copy, Debug)]
pub struct RawMatch<'a> {
    pub anchor: Point,
    /// Color the pattern matched for.
    pub color: Color,
    pub pattern: &'a Pattern,
    pub transform: Transform,
}

impl<'a> RawMatch<'a> {
    /// Place the match on a board of the given size.
    #[must_use]
    pub fn site(&self, board_size: u8) -> MatchSite<'a> {
        MatchSite::new(self.pattern, self.anchor, self.color, self.transform, board_size)
    }
}

/// Enumerates pattern occurrences on a board.
pub trait PatternMatcher {
    /// Report every occurrence of every pattern in `database`.
    ///
    /// `callback` runs once per occurrence, sequentially.
    fn match_patterns<'db>(
        &self,
        board: &Board,
        database: &'db PatternDatabase,
        mode: AnchorMode,
        callback: &mut dyn FnMut(RawMatch<'db>),
    );
}
