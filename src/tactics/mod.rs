//! Tactical reading results, as consumed by the connection analysis.
//!
//! - [`TacticalOracle`]: the trait the analysis queries
//! - [`AttackCode`]: attack result against a worm
//! - [`StaticOracle`]: answers from precomputed tables
//! - [`CountingOracle`]: counts queries made through it

mod oracle;
mod table;

pub use oracle::{AttackCode, TacticalOracle};
pub use table::{CountingOracle, OracleCalls, StaticOracle};
