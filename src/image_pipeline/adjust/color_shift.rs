//! Single-channel additive color shift.
//!
//! A signed percentage is mapped onto the 8-bit range (`percentage * 255 / 100`,
//! truncated toward zero). A non-negative value is added to the red channel, a
//! negative value is subtracted from the blue channel, which raises it by the
//! absolute amount. Green and alpha are never touched.

use image::{GenericImageView, Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::adjust::types::ShiftedChannel;
use crate::image_pipeline::common::error::{Result, ShiftError};

/// Bytes per RGBA8 pixel.
const CHANNELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorShift {
    percentage: i64,
    value: i128,
}

impl ColorShift {
    pub fn new(percentage: i64) -> Self {
        // i128 keeps `percentage * 255` from overflowing at the i64 extremes
        let value = i128::from(percentage) * 255 / 100;
        Self { percentage, value }
    }

    pub fn percentage(&self) -> i64 {
        self.percentage
    }

    /// Signed delta applied to the shifted channel.
    pub fn value(&self) -> i128 {
        self.value
    }

    pub fn channel(&self) -> ShiftedChannel {
        if self.value >= 0 {
            ShiftedChannel::Red
        } else {
            ShiftedChannel::Blue
        }
    }

    /// Shifts a single pixel, returning the adjusted copy.
    pub fn shift_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
        let mut shifted = pixel;
        self.shift_channels(&mut shifted.0);
        shifted
    }

    /// Applies the shift to every pixel of `image`, producing a new RGBA8 buffer
    /// with the same dimensions. The source is only read.
    pub fn apply<I>(&self, image: &I) -> RgbaImage
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = image.dimensions();
        debug!(
            "Shifting {} channel by {} on {}x{} image",
            self.channel(),
            self.value,
            width,
            height
        );

        let mut output = RgbaImage::new(width, height);
        for (x, y, pixel) in image.pixels() {
            output.put_pixel(x, y, self.shift_pixel(pixel));
        }
        output
    }

    /// Row-parallel variant of [`ColorShift::apply`]. Pixels are independent, so
    /// the result is identical to the sequential path.
    pub fn apply_parallel<I>(&self, image: &I) -> RgbaImage
    where
        I: GenericImageView<Pixel = Rgba<u8>> + Sync,
    {
        let (width, height) = image.dimensions();
        debug!(
            "Shifting {} channel by {} on {}x{} image (parallel)",
            self.channel(),
            self.value,
            width,
            height
        );

        let mut output = RgbaImage::new(width, height);
        if width == 0 || height == 0 {
            return output;
        }

        let row_len = width as usize * CHANNELS;
        output
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
                    let pixel = image.get_pixel(x as u32, y as u32);
                    dst.copy_from_slice(&pixel.0);
                    self.shift_channels(dst);
                }
            });
        output
    }

    fn shift_channels(&self, channels: &mut [u8]) {
        match self.channel() {
            ShiftedChannel::Red => {
                let red = &mut channels[ShiftedChannel::Red.index()];
                *red = clamp_to_255(i128::from(*red) + self.value);
            }
            ShiftedChannel::Blue => {
                let blue = &mut channels[ShiftedChannel::Blue.index()];
                *blue = clamp_to_255(i128::from(*blue) - self.value);
            }
        }
    }
}

/// Upper clamp only. Both branches of the shift only ever add to a channel,
/// so the sum cannot go below zero.
fn clamp_to_255(n: i128) -> u8 {
    n.min(255) as u8
}

/// Parses the percentage argument as a signed integer.
pub fn parse_percentage(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| ShiftError::InvalidPercentage {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
