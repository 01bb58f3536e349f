//! Channel adjustment module
//!
//! Holds the single-channel additive color shift applied between decode and encode.

mod color_shift;
pub mod types;

pub use color_shift::{ColorShift, parse_percentage};
pub use types::ShiftedChannel;
