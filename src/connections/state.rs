//! Analysis state and context.
//!
//! [`AnalysisState`] is the mutable part of one analysis cycle: dragon
//! identity and both colors' eye space. [`AnalysisContext`] bundles the
//! read-only inputs every match is judged against.

use crate::core::{AnalysisConfig, Board};
use crate::dragons::DragonRegistry;
use crate::eyes::{eye_maps_from_board, EyeMaps};
use crate::tactics::TacticalOracle;

/// Shared mutable state of one analysis cycle.
///
/// Allocated once per cycle and rebuilt with [`reset`](Self::reset) before
/// the next one.
///
/// ## Example
///
/// ```
/// use go_connections::connections::AnalysisState;
/// use go_connections::core::{Board, Color, Point};
///
/// let board = Board::from_diagram("O.O\n...\n...").unwrap();
/// let state = AnalysisState::new(&board);
///
/// assert_eq!(state.dragons.dragon_count(), 2);
/// assert!(state.eyes[Color::White].is_owned_by(Point::new(0, 1), Color::White));
/// ```
#[derive(Clone, Debug)]
pub struct AnalysisState {
    pub dragons: DragonRegistry,
    pub eyes: EyeMaps,
}

impl AnalysisState {
    /// Seed dragons and eye space from a board.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        Self {
            dragons: DragonRegistry::from_board(board),
            eyes: eye_maps_from_board(board),
        }
    }

    /// Discard this cycle's results and reseed from `board`.
    pub fn reset(&mut self, board: &Board) {
        *self = Self::new(board);
    }
}

/// Read-only inputs for judging matches.
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub board: &'a Board,
    pub oracle: &'a dyn TacticalOracle,
    pub config: &'a AnalysisConfig,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(board: &'a Board, oracle: &'a dyn TacticalOracle, config: &'a AnalysisConfig) -> Self {
        Self {
            board,
            oracle,
            config,
        }
    }
}

impl std::fmt::Debug for AnalysisContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("board_size", &self.board.size())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
