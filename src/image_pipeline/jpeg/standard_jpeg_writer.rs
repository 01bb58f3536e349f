use std::io::Write;
use tracing::debug;
use image::{DynamicImage, RgbaImage};
use image::codecs::jpeg::JpegEncoder;
use crate::image_pipeline::common::error::{Result, ShiftError};
use crate::image_pipeline::jpeg::types::ShiftConfig;
use crate::image_pipeline::jpeg::writer::JpegWriter;

pub struct StandardJpegWriter;

impl JpegWriter for StandardJpegWriter {
    fn write_jpeg(&self, image: &RgbaImage, output: &mut dyn Write, config: &ShiftConfig) -> Result<()> {
        debug!(
            "Encoding JPEG image: {}x{} at quality {}",
            image.width(), image.height(), config.quality
        );

        let mut buffer = Vec::new();

        {
            // JPEG carries no alpha channel
            let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(&mut buffer, config.quality);
            encoder
                .encode_image(&rgb)
                .map_err(|e| ShiftError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("JPEG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
