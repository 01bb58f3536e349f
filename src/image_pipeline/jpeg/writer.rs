use std::io::Write;
use image::RgbaImage;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::jpeg::types::ShiftConfig;

pub trait JpegWriter {
    fn write_jpeg(&self, image: &RgbaImage, output: &mut dyn Write, config: &ShiftConfig) -> Result<()>;
}
