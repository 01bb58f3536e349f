//! Types for channel adjustment

use std::fmt;

/// Channel that a shift writes to.
///
/// Non-negative shift values push the red channel up; negative values push
/// the blue channel up by the absolute amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftedChannel {
    Red,
    Blue,
}

impl ShiftedChannel {
    /// Index of the channel inside an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            ShiftedChannel::Red => 0,
            ShiftedChannel::Blue => 2,
        }
    }
}

impl fmt::Display for ShiftedChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftedChannel::Red => write!(f, "red"),
            ShiftedChannel::Blue => write!(f, "blue"),
        }
    }
}
