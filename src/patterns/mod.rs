//! Connection patterns.
//!
//! - [`Pattern`]: classification, elements, key point, hooks
//! - [`PatternDatabase`]: the collection the matcher runs over
//! - [`MatchSite`]: a pattern placed on the board
//!
//! Patterns are declarative data loaded from text (see [`PatternDatabase::parse`]),
//! optionally extended with code through [`PatternHooks`].

mod database;
mod hooks;
mod parse;
mod pattern;
mod site;
mod standard;

pub use database::PatternDatabase;
pub use hooks::{MatchAction, MatchPredicate, PatternHooks};
pub use pattern::{ElementAttribute, Elements, Pattern, PatternClass, PatternElement};
pub use site::MatchSite;
pub use standard::STANDARD_CONNECTIONS;
