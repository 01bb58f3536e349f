//! JPEG reading and writing module
//!
//! This module provides format sniffing, JPEG decoding and JPEG encoding on top
//! of the `image` crate, plus the configuration shared by the pipeline.

mod reader;
mod image_crate_reader;
mod writer;
mod standard_jpeg_writer;
pub mod types;

pub use reader::JpegReader;
pub use image_crate_reader::ImageCrateReader;
pub use writer::JpegWriter;
pub use standard_jpeg_writer::StandardJpegWriter;
pub use types::{ShiftConfig, ShiftConfigBuilder, DEFAULT_OUTPUT_PATH};
