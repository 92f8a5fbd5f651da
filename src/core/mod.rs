//! Core types: points and symmetries, colors, boards, configuration, errors.
//!
//! Everything here is independent of patterns and dragons; the analysis
//! modules build on these.

pub mod point;
pub mod color;
pub mod board;
pub mod config;
pub mod error;

pub use point::{Offset, Point, Transform};
pub use color::{Color, ColorMap};
pub use board::{Board, MAX_BOARD_SIZE};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
