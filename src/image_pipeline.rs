//! Image processing pipeline module
//!
//! This module provides a structured approach to the JPEG color shift,
//! with separate modules for JPEG reading and writing, the channel adjustment
//! itself, and conversion orchestration.

pub mod jpeg;
pub mod adjust;
pub mod conversions;
pub mod common;

pub use common::{
    ShiftError,
    Result,
};

pub use jpeg::{
    JpegReader,
    ImageCrateReader,
    JpegWriter,
    StandardJpegWriter,
    ShiftConfig,
    ShiftConfigBuilder,
    DEFAULT_OUTPUT_PATH,
};

pub use adjust::{
    ColorShift,
    ShiftedChannel,
    parse_percentage,
};

pub use conversions::{
    ColorShiftPipeline,
};
