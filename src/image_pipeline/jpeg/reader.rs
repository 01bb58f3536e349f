use image::{DynamicImage, ImageFormat};
use crate::image_pipeline::common::error::Result;

pub trait JpegReader {
    /// Detects the container format from the leading bytes.
    fn sniff_format(&self, data: &[u8]) -> Result<ImageFormat>;
    fn read_image(&self, data: &[u8]) -> Result<DynamicImage>;
}
