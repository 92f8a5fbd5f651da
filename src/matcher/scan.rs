//! Exhaustive matcher.

use crate::core::{Board, Color, Point, Transform};
use crate::patterns::{Pattern, PatternDatabase};

use super::{AnchorMode, PatternMatcher, RawMatch};

/// Tries every pattern at every stone under all eight transforms.
///
/// Symmetric patterns are reported once per transform that fits, so the same
/// shape can arrive several times; consumers must tolerate repeats.
///
/// ## Example
///
/// ```
/// use go_connections::core::Board;
/// use go_connections::matcher::{AnchorMode, PatternMatcher, ScanMatcher};
/// use go_connections::patterns::PatternDatabase;
///
/// let board = Board::from_diagram("
///     . . . . .
///     . O . O .
///     . . . . .
///     . . . . .
///     . . . . .
/// ").unwrap();
/// let db = PatternDatabase::standard().unwrap();
///
/// let mut names = Vec::new();
/// ScanMatcher::new().match_patterns(&board, &db, AnchorMode::AnchorColor, &mut |m| {
///     names.push(m.pattern.name.clone());
/// });
///
/// // The one-point jump, from each end under the fitting transforms
/// assert!(!names.is_empty());
/// assert!(names.iter().all(|n| n == "CC2"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanMatcher;

impl ScanMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check one placement of a pattern.
    #[must_use]
    pub fn matches_at(
        board: &Board,
        pattern: &Pattern,
        anchor: Point,
        color: Color,
        transform: Transform,
    ) -> bool {
        let size = board.size();
        let elements_fit = pattern.elements.iter().all(|element| {
            anchor
                .offset(transform.apply(element.offset), size)
                .is_some_and(|p| element.attribute.accepts(board.get(p), color))
        });

        // The key point must exist on the board even when it is not an element
        let move_fits = pattern
            .move_offset
            .map_or(true, |offset| anchor.offset(transform.apply(offset), size).is_some());

        elements_fit && move_fits
    }
}

impl PatternMatcher for ScanMatcher {
    fn match_patterns<'db>(
        &self,
        board: &Board,
        database: &'db PatternDatabase,
        mode: AnchorMode,
        callback: &mut dyn FnMut(RawMatch<'db>),
    ) {
        let size = board.size();

        for start in board.points() {
            let stone = board.get(start);
            if !stone.is_stone() {
                continue;
            }
            let color = mode.matched_color(stone);

            for pattern in database.iter() {
                let Some(pivot) = mode.pivot(pattern) else {
                    continue;
                };
                for transform in Transform::all() {
                    let Some(anchor) = start.offset(transform.apply(pivot).reversed(), size) else {
                        continue;
                    };
                    if Self::matches_at(board, pattern, anchor, color, transform) {
                        callback(RawMatch {
                            anchor,
                            color,
                            pattern,
                            transform,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternClass;

    fn collect<'db>(board: &Board, db: &'db PatternDatabase, mode: AnchorMode) -> Vec<RawMatch<'db>> {
        let mut found = Vec::new();
        ScanMatcher::new().match_patterns(board, db, mode, &mut |m| found.push(m));
        found
    }

    fn single(diagram: &str, class: PatternClass) -> PatternDatabase {
        let mut db = PatternDatabase::new();
        db.register(Pattern::from_diagram("p", diagram, class).unwrap());
        db
    }

    #[test]
    fn test_asymmetric_pattern_orientations() {
        // O* : a friendly stone with an empty point next to it
        let db = single("O*", PatternClass::NONE);
        let board = Board::from_diagram("...\n.O.\n...").unwrap();

        // Four distinct empty neighbors, each reached by two transforms
        let found = collect(&board, &db, AnchorMode::AnchorColor);
        assert_eq!(found.len(), 8);
        assert!(found.iter().all(|m| m.anchor == Point::new(1, 1) && m.color == Color::White));
    }

    #[test]
    fn test_edge_limits_placements() {
        let db = single("O*", PatternClass::NONE);
        let board = Board::from_diagram("O..\n...\n...").unwrap();

        // Only right and down neighbors exist
        assert_eq!(collect(&board, &db, AnchorMode::AnchorColor).len(), 4);
    }

    #[test]
    fn test_colors_are_relative() {
        let db = single("OX", PatternClass::NONE);
        let board = Board::from_diagram("OX.\n...\n...").unwrap();

        let found = collect(&board, &db, AnchorMode::AnchorColor);
        // Each stone sees the other as the opponent, in one direction
        let white: Vec<_> = found.iter().filter(|m| m.color == Color::White).collect();
        let black: Vec<_> = found.iter().filter(|m| m.color == Color::Black).collect();
        assert_eq!(white.len(), 2);
        assert_eq!(black.len(), 2);
        assert_eq!(black[0].anchor, Point::new(0, 1));
    }

    fn placements(found: &[RawMatch<'_>]) -> Vec<(Point, Color, u8)> {
        let mut out: Vec<_> = found.iter().map(|m| (m.anchor, m.color, m.transform.index())).collect();
        out.sort_by_key(|&(anchor, color, transform)| (anchor, color as u8, transform));
        out
    }

    #[test]
    fn test_anchor_other_finds_same_occurrences() {
        let db = single("?X?\nO*O", PatternClass::CUT);
        let board = Board::from_diagram(".X..\nO.O.\n....\n.X..").unwrap();

        let from_friends = collect(&board, &db, AnchorMode::AnchorColor);
        let from_enemies = collect(&board, &db, AnchorMode::AnchorOther);

        assert!(!from_friends.is_empty());
        assert_eq!(placements(&from_enemies), placements(&from_friends));
        // Reported at the pattern origin, which holds the friendly stone
        assert!(from_enemies.iter().all(|m| board.get(m.anchor) == Color::White));
    }

    #[test]
    fn test_anchor_other_needs_enemy_element() {
        let db = single("O*", PatternClass::NONE);
        let board = Board::from_diagram("OX.\n...\n...").unwrap();

        assert!(collect(&board, &db, AnchorMode::AnchorOther).is_empty());
        assert!(!collect(&board, &db, AnchorMode::AnchorColor).is_empty());
    }

    #[test]
    fn test_raw_match_site() {
        let db = single("O*", PatternClass::CUT);
        let board = Board::from_diagram("O..\n...\n...").unwrap();

        for m in collect(&board, &db, AnchorMode::AnchorColor) {
            let site = m.site(board.size());
            let mv = site.key_move.unwrap();
            assert!(mv == Point::new(0, 1) || mv == Point::new(1, 0));
        }
    }
}
