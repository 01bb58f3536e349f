//! JPEG reader implementation using the image crate.

use tracing::debug;
use image::{DynamicImage, ImageFormat};
use crate::image_pipeline::common::error::{Result, ShiftError};
use crate::image_pipeline::jpeg::reader::JpegReader;

/// Reader backed by the `image` crate's format detection and JPEG decoder.
pub struct ImageCrateReader;

impl JpegReader for ImageCrateReader {
    /// Identifies the format from magic bytes only, without decoding pixels.
    ///
    /// Returns `DecodeError` when the bytes match no known image signature.
    fn sniff_format(&self, data: &[u8]) -> Result<ImageFormat> {
        let format = image::guess_format(data)
            .map_err(|e| ShiftError::DecodeError(e.to_string()))?;
        debug!("Sniffed format: {:?} ({} bytes)", format, data.len());
        Ok(format)
    }

    /// Decodes `data` strictly as JPEG.
    fn read_image(&self, data: &[u8]) -> Result<DynamicImage> {
        debug!("Decoding JPEG image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Jpeg)
            .map_err(|e| ShiftError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Ok(decoded)
    }
}
