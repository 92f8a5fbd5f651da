//! # go-connections
//!
//! Cutting point and connection analysis for Go positions.
//!
//! A pattern matcher reports every occurrence of a connection-database shape
//! on the board. For each occurrence this crate decides whether the shape is
//! tactically valid and, if so, commits its consequence:
//!
//! - **cut patterns** mark a cutting point and close nearby eye space to
//!   connections,
//! - **connection patterns** join the dragons they link.
//!
//! ## Design Principles
//!
//! 1. **Reading is external**: tactical results come from a
//!    [`TacticalOracle`]; this crate never searches.
//!
//! 2. **Explicit state**: dragons and eye space live in an
//!    [`AnalysisState`] passed by reference, rebuilt once per cycle.
//!
//! 3. **Testable guards**: acceptance is an ordered list of independent
//!    guards ([`GUARD_ORDER`]) with short-circuit evaluation.
//!
//! ## Modules
//!
//! - `core`: points, symmetries, colors, boards, configuration, errors
//! - `dragons`: dragon identity and joins
//! - `eyes`: per-color eye-space annotations
//! - `tactics`: tactical oracle trait and table-driven oracles
//! - `patterns`: pattern definitions, hooks, database and its text format
//! - `matcher`: pattern matcher trait and an exhaustive matcher
//! - `connections`: match validation, effects, the cut and connection passes
//!
//! ## Example
//!
//! ```
//! use go_connections::{
//!     AnalysisConfig, AnalysisContext, AnalysisState, Board, ConnectionResolver,
//!     PatternDatabase, Point, ScanMatcher, StaticOracle,
//! };
//!
//! // Bamboo joint between two white pairs
//! let board = Board::from_diagram("
//!     . . . . .
//!     . O O . .
//!     . . . . .
//!     . O O . .
//!     . . . . .
//! ").unwrap();
//!
//! let db = PatternDatabase::standard().unwrap();
//! let oracle = StaticOracle::new();
//! let config = AnalysisConfig::default();
//! let matcher = ScanMatcher::new();
//! let resolver = ConnectionResolver::new(&db, &matcher, AnalysisContext::new(&board, &oracle, &config));
//!
//! let mut state = AnalysisState::new(&board);
//! resolver.resolve(&mut state);
//!
//! assert!(state.dragons.same_dragon(Point::new(1, 1), Point::new(3, 2)));
//! ```

pub mod core;
pub mod dragons;
pub mod eyes;
pub mod tactics;
pub mod patterns;
pub mod matcher;
pub mod connections;

// Re-export commonly used types
pub use crate::core::{
    Offset, Point, Transform,
    Color, ColorMap,
    Board, MAX_BOARD_SIZE,
    AnalysisConfig, AnalysisError, Result,
};

pub use crate::dragons::DragonRegistry;

pub use crate::eyes::{EyeMaps, EyePoint, EyeSpace};

pub use crate::tactics::{AttackCode, CountingOracle, StaticOracle, TacticalOracle};

pub use crate::patterns::{
    ElementAttribute, MatchSite, Pattern, PatternClass, PatternDatabase, PatternElement, PatternHooks,
};

pub use crate::matcher::{AnchorMode, PatternMatcher, RawMatch, ScanMatcher};

pub use crate::connections::{
    AnalysisContext, AnalysisState, AppliedEffects, ConnectionResolver, CycleStats,
    EffectApplier, Guard, MatchValidator, PassStats, Verdict, GUARD_ORDER,
};
