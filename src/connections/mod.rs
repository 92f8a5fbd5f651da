//! Cutting point and connection analysis.
//!
//! Each raw pattern match goes through two stages:
//!
//! 1. [`MatchValidator`]: ordered guards decide whether the match holds
//!    tactically ([`Guard`], [`GUARD_ORDER`]).
//! 2. [`EffectApplier`]: an accepted cut marks eye space; an accepted
//!    connection joins dragons.
//!
//! [`ConnectionResolver`] runs the two passes over a board, writing into an
//! [`AnalysisState`].

mod apply;
mod resolver;
mod state;
mod validate;

pub use apply::{AppliedEffects, EffectApplier};
pub use resolver::{ConnectionResolver, CycleStats, MatchOutcome, Pass, PassStats};
pub use state::{AnalysisContext, AnalysisState};
pub use validate::{Guard, MatchValidator, Verdict, GUARD_ORDER};
