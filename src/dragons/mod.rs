//! Dragon identity.
//!
//! - [`DragonRegistry`]: maps every stone to the origin of its dragon and
//!   joins dragons.

mod registry;

pub use registry::{DragonRegistry, Members};
