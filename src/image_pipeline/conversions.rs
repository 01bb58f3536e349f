//! Pipeline conversions module
//!
//! This module contains orchestration logic for the JPEG color shift.

mod color_shift_pipeline;

#[cfg(test)]
mod tests;

pub use color_shift_pipeline::ColorShiftPipeline;
