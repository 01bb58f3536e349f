use tracing::{info, instrument};
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::image_pipeline::{
    adjust::ColorShift,
    common::error::{Result, ShiftError},
    jpeg::{ImageCrateReader, JpegReader, JpegWriter, ShiftConfig, StandardJpegWriter},
};

pub struct ColorShiftPipeline<R: JpegReader, W: JpegWriter> {
    reader: R,
    writer: W,
    config: ShiftConfig,
}

impl ColorShiftPipeline<ImageCrateReader, StandardJpegWriter> {
    pub fn new(config: ShiftConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardJpegWriter,
            config,
        }
    }
}

impl<R: JpegReader, W: JpegWriter> ColorShiftPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ShiftConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ShiftError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    fn ensure_jpeg_format(format: ImageFormat) -> Result<()> {
        if format != ImageFormat::Jpeg {
            return Err(ShiftError::UnsupportedFormat(format!(
                "detected {:?} data",
                format
            )));
        }
        Ok(())
    }

    fn ensure_jpeg_extension(&self, path: &Path) -> Result<()> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        if !self.config.accepts_extension(extension) {
            return Err(ShiftError::UnsupportedFormat(format!(
                "{}: extension must be one of {:?}",
                path.display(),
                self.config.accepted_extensions
            )));
        }
        Ok(())
    }

    /// Decodes already-sniffed JPEG bytes and applies the shift.
    fn decode_and_shift(&self, input_data: &[u8], percentage: i64) -> Result<RgbaImage> {
        let image = {
            let _span = tracing::info_span!("decode_jpeg").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        let shift = ColorShift::new(percentage);
        let _span = tracing::info_span!("shift_colors",
            channel = %shift.channel(),
            value = shift.value(),
            parallel = self.config.parallel
        ).entered();
        info!(
            "Shifting {} channel by {} ({}%)",
            shift.channel(),
            shift.value(),
            shift.percentage()
        );

        Ok(if self.config.parallel {
            shift.apply_parallel(&image)
        } else {
            shift.apply(&image)
        })
    }

    /// Sniffs, decodes and shifts `input_data`, returning the new image.
    /// Anything that is not JPEG data is rejected before decoding.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn shift(&self, input_data: &[u8], percentage: i64) -> Result<RgbaImage> {
        let format = {
            let _span = tracing::info_span!("sniff_format").entered();
            self.reader.sniff_format(input_data)?
        };
        Self::ensure_jpeg_format(format)?;

        self.decode_and_shift(input_data, percentage)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], percentage: i64, output: &mut dyn Write) -> Result<()> {
        info!("Starting JPEG color shift");

        let shifted = self.shift(input_data, percentage)?;

        {
            let _span = tracing::info_span!("encode_jpeg").entered();
            self.writer.write_jpeg(&shifted, output, &self.config)?;
        }

        info!(
            width = shifted.width(),
            height = shifted.height(),
            "Color shift complete"
        );
        Ok(())
    }

    /// Shifts the JPEG at `input_path` and writes the result to the configured
    /// output path, which is returned. The output file is only created once the
    /// shift has succeeded.
    #[instrument(skip(self, input_path))]
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P, percentage: i64) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = self.config.output_path.as_path();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Shifting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ShiftError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let format = {
            let _span = tracing::info_span!("sniff_format").entered();
            self.reader.sniff_format(&input_data)?
        };
        self.ensure_jpeg_extension(input_path)?;
        Self::ensure_jpeg_format(format)?;

        let shifted = self.decode_and_shift(&input_data, percentage)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            self.create_output_file(output_path)?
        };

        {
            let _span = tracing::info_span!("encode_jpeg").entered();
            self.writer.write_jpeg(&shifted, &mut output_file, &self.config)?;
        }

        info!(
            width = shifted.width(),
            height = shifted.height(),
            output = %output_path.display(),
            "Color shift complete"
        );
        Ok(output_path.to_path_buf())
    }

    fn create_output_file(&self, output_path: &Path) -> Result<std::fs::File> {
        let output_error =
            |e: std::io::Error| ShiftError::OutputWriteError(format!("{}: {}", output_path.display(), e));

        if self.config.create_output_dir {
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(output_error)?;
            }
        }

        std::fs::File::create(output_path).map_err(output_error)
    }

    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ShiftConfig) {
        self.config = config;
    }
}
