//! Eye-space annotations.
//!
//! - [`EyePoint`]: owner and cut / marginal / inhibit-connection flags
//! - [`EyeSpace`]: one color's annotations for the whole board
//! - [`EyeMaps`]: both colors' eye space
//!
//! The connection analysis writes these; life-and-death reasoning reads them.

mod space;

pub use space::{eye_maps_from_board, EyeMaps, EyePoint, EyeSpace};
