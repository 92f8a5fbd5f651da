//! A pattern placed on the board.

use crate::core::{Color, Offset, Point, Transform};

use super::pattern::{Pattern, PatternElement};

/// One occurrence of a pattern: anchor, color, orientation.
///
/// Resolves pattern offsets to board points. The key move is computed once
/// at construction.
#[derive(Clone, Copy, Debug)]
pub struct MatchSite<'a> {
    pub pattern: &'a Pattern,
    pub anchor: Point,
    /// Color the pattern was matched for.
    pub color: Color,
    pub transform: Transform,
    /// The pattern's key point on the board, if it has one.
    pub key_move: Option<Point>,
    board_size: u8,
}

impl<'a> MatchSite<'a> {
    /// Place a pattern.
    #[must_use]
    pub fn new(
        pattern: &'a Pattern,
        anchor: Point,
        color: Color,
        transform: Transform,
        board_size: u8,
    ) -> Self {
        let key_move = pattern
            .move_offset
            .and_then(|offset| anchor.offset(transform.apply(offset), board_size));

        Self {
            pattern,
            anchor,
            color,
            transform,
            key_move,
            board_size,
        }
    }

    /// Board point of a pattern offset, `None` if it falls off the board.
    #[must_use]
    pub fn locate(&self, offset: Offset) -> Option<Point> {
        self.anchor
            .offset(self.transform.apply(offset), self.board_size)
    }

    /// Elements with their board points, in pattern order.
    ///
    /// Elements off the board are skipped; a matched site has none.
    pub fn elements(&self) -> impl Iterator<Item = (&'a PatternElement, Point)> + 'a {
        let site = *self;
        self.pattern
            .elements
            .iter()
            .filter_map(move |element| site.locate(element.offset).map(|p| (element, p)))
    }

    /// The side that would play the cut.
    #[must_use]
    pub fn opponent(&self) -> Color {
        self.color.opponent()
    }

    /// Board size the site was placed on.
    #[must_use]
    pub fn board_size(&self) -> u8 {
        self.board_size
    }
}
