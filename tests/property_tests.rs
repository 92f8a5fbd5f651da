//! Property tests.
//!
//! - The final dragon partition does not depend on join or match order
//! - Both passes are idempotent on random positions

use proptest::prelude::*;

use go_connections::connections::{AnalysisContext, AnalysisState, ConnectionResolver};
use go_connections::core::{AnalysisConfig, Board, Color, Point};
use go_connections::dragons::DragonRegistry;
use go_connections::matcher::{AnchorMode, PatternMatcher, RawMatch, ScanMatcher};
use go_connections::patterns::PatternDatabase;
use go_connections::tactics::StaticOracle;

const SIZE: u8 = 7;

// =============================================================================
// Test Helpers
// =============================================================================

struct ReversedMatcher;

impl PatternMatcher for ReversedMatcher {
    fn match_patterns<'db>(
        &self,
        board: &Board,
        database: &'db PatternDatabase,
        mode: AnchorMode,
        callback: &mut dyn FnMut(RawMatch<'db>),
    ) {
        let mut found = Vec::new();
        ScanMatcher::new().match_patterns(board, database, mode, &mut |m| found.push(m));
        found.into_iter().rev().for_each(callback);
    }
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..6, (SIZE as usize) * (SIZE as usize)).prop_map(|cells| {
        let mut board = Board::new(SIZE);
        for (i, cell) in cells.into_iter().enumerate() {
            let color = match cell {
                0 | 1 => Color::White,
                2 => Color::Black,
                _ => Color::Empty,
            };
            board.set(Point::from_index(i, SIZE), color);
        }
        board
    })
}

/// Pairs of stones that share a dragon.
fn partition(board: &Board, dragons: &DragonRegistry) -> Vec<(Point, Point)> {
    let stones: Vec<Point> = board.points().filter(|&p| board.get(p).is_stone()).collect();
    let mut pairs = Vec::new();
    for (i, &a) in stones.iter().enumerate() {
        for &b in &stones[i + 1..] {
            if dragons.same_dragon(a, b) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn join_order_does_not_change_partition(
        joins in prop::collection::vec((0usize..13, 0usize..13), 0..20),
    ) {
        // Isolated white stones on a checkerboard
        let mut board = Board::new(5);
        for i in (0..25).step_by(2) {
            board.set(Point::from_index(i, 5), Color::White);
        }
        let stones: Vec<Point> = board.stones(Color::White).collect();

        let mut forward = DragonRegistry::from_board(&board);
        for &(a, b) in &joins {
            forward.join(stones[a], stones[b]);
        }
        let mut backward = DragonRegistry::from_board(&board);
        for &(a, b) in joins.iter().rev() {
            backward.join(stones[b], stones[a]);
        }

        prop_assert_eq!(partition(&board, &forward), partition(&board, &backward));
        prop_assert_eq!(forward.dragon_count(), backward.dragon_count());
    }

    #[test]
    fn match_order_does_not_change_partition(board in board_strategy()) {
        let db = PatternDatabase::standard().unwrap();
        let oracle = StaticOracle::new();
        let config = AnalysisConfig::default();

        let scan = ScanMatcher::new();
        let forward = ConnectionResolver::new(&db, &scan, AnalysisContext::new(&board, &oracle, &config));
        let mut forward_state = AnalysisState::new(&board);
        forward.resolve(&mut forward_state);

        let backward = ConnectionResolver::new(&db, &ReversedMatcher, AnalysisContext::new(&board, &oracle, &config));
        let mut backward_state = AnalysisState::new(&board);
        backward.resolve(&mut backward_state);

        prop_assert_eq!(
            partition(&board, &forward_state.dragons),
            partition(&board, &backward_state.dragons)
        );
        prop_assert_eq!(&forward_state.eyes, &backward_state.eyes);
    }

    #[test]
    fn passes_are_idempotent(board in board_strategy()) {
        let db = PatternDatabase::standard().unwrap();
        let oracle = StaticOracle::new();
        let config = AnalysisConfig::default();
        let matcher = ScanMatcher::new();
        let resolver = ConnectionResolver::new(&db, &matcher, AnalysisContext::new(&board, &oracle, &config));
        let mut state = AnalysisState::new(&board);

        resolver.find_cuts(&mut state);
        let again = resolver.find_cuts(&mut state);
        prop_assert!(!again.changed_state());

        resolver.find_connections(&mut state);
        let again = resolver.find_connections(&mut state);
        prop_assert!(!again.changed_state());
    }
}
