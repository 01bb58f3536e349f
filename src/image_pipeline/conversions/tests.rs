#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use crate::image_pipeline::common::error::{Result, ShiftError};
    use crate::image_pipeline::jpeg::{JpegReader, JpegWriter, ShiftConfig};
    use crate::image_pipeline::conversions::ColorShiftPipeline;

    struct MockReader {
        sniffed: ImageFormat,
        should_fail: bool,
        mock_image: Option<RgbaImage>,
    }

    impl MockReader {
        fn jpeg() -> Self {
            Self { sniffed: ImageFormat::Jpeg, should_fail: false, mock_image: None }
        }
    }

    impl JpegReader for MockReader {
        fn sniff_format(&self, _data: &[u8]) -> Result<ImageFormat> {
            Ok(self.sniffed)
        }

        fn read_image(&self, _data: &[u8]) -> Result<DynamicImage> {
            if self.should_fail {
                return Err(ShiftError::DecodeError("Mock decode error".to_string()));
            }
            let image = self.mock_image.clone()
                .unwrap_or_else(|| RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])));
            Ok(DynamicImage::ImageRgba8(image))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written_data: std::sync::Arc<std::sync::Mutex<Vec<RgbaImage>>>,
    }

    impl JpegWriter for MockWriter {
        fn write_jpeg(&self, image: &RgbaImage, _output: &mut dyn Write, _config: &ShiftConfig) -> Result<()> {
            if self.should_fail {
                return Err(ShiftError::EncodeError("Mock encode error".to_string()));
            }
            self.written_data.lock().unwrap().push(image.clone());
            Ok(())
        }
    }

    fn mock_writer() -> (MockWriter, std::sync::Arc<std::sync::Mutex<Vec<RgbaImage>>>) {
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        (MockWriter { should_fail: false, written_data: written.clone() }, written)
    }

    #[test]
    fn test_config_builder() {
        let config = ShiftConfig::builder()
            .output_path("out/shifted.jpeg")
            .quality(0)
            .accepted_extensions(["jpeg", "jpg"])
            .validate_dimensions(false)
            .parallel(true)
            .create_output_dir(true)
            .build();

        assert_eq!(config.output_path, std::path::PathBuf::from("out/shifted.jpeg"));
        assert_eq!(config.quality, 1);
        assert!(config.accepts_extension("jpg"));
        assert!(!config.accepts_extension("JPEG"));
        assert!(!config.validate_dimensions);
        assert!(config.parallel);
        assert!(config.create_output_dir);
    }

    #[test]
    fn test_config_defaults() {
        let config = ShiftConfig::default();
        assert_eq!(config.output_path, std::path::PathBuf::from("./images/output.jpeg"));
        assert_eq!(config.quality, 100);
        assert!(config.accepts_extension("jpeg"));
        assert!(!config.accepts_extension("jpg"));
        assert!(!config.parallel);
    }

    #[test]
    fn test_successful_conversion() {
        let (writer, written) = mock_writer();
        let pipeline = ColorShiftPipeline::with_custom(
            MockReader::jpeg(),
            writer,
            ShiftConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake jpeg data", 50, &mut output);

        assert!(result.is_ok());
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].pixels().all(|p| *p == Rgba([137, 20, 30, 255])));
    }

    #[test]
    fn test_negative_conversion_shifts_blue() {
        let (writer, written) = mock_writer();
        let pipeline = ColorShiftPipeline::with_custom(
            MockReader::jpeg(),
            writer,
            ShiftConfig::builder().parallel(true).build(),
        );

        let mut output = Cursor::new(Vec::new());
        pipeline.convert(b"fake jpeg data", -10, &mut output).unwrap();

        let written = written.lock().unwrap();
        assert!(written[0].pixels().all(|p| *p == Rgba([10, 20, 55, 255])));
    }

    #[test]
    fn test_percentage_beyond_32_bits_saturates() {
        let (writer, written) = mock_writer();
        let pipeline = ColorShiftPipeline::with_custom(
            MockReader::jpeg(),
            writer,
            ShiftConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        pipeline.convert(b"fake jpeg data", 3_000_000_000, &mut output).unwrap();
        pipeline.convert(b"fake jpeg data", i64::MIN, &mut output).unwrap();

        let written = written.lock().unwrap();
        assert!(written[0].pixels().all(|p| *p == Rgba([255, 20, 30, 255])));
        assert!(written[1].pixels().all(|p| *p == Rgba([10, 20, 255, 255])));
    }

    #[test]
    fn test_non_jpeg_rejected_before_decode() {
        let (writer, written) = mock_writer();
        let reader = MockReader { sniffed: ImageFormat::Png, should_fail: true, mock_image: None };
        let pipeline = ColorShiftPipeline::with_custom(reader, writer, ShiftConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", 10, &mut output);

        assert!(matches!(result.unwrap_err(), ShiftError::UnsupportedFormat(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reader_failure() {
        let (writer, written) = mock_writer();
        let reader = MockReader { sniffed: ImageFormat::Jpeg, should_fail: true, mock_image: None };
        let pipeline = ColorShiftPipeline::with_custom(reader, writer, ShiftConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake jpeg data", 10, &mut output);

        assert!(matches!(result.unwrap_err(), ShiftError::DecodeError(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_writer_failure() {
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = MockWriter { should_fail: true, written_data: written };
        let pipeline = ColorShiftPipeline::with_custom(
            MockReader::jpeg(),
            writer,
            ShiftConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake jpeg data", 10, &mut output);

        assert!(matches!(result.unwrap_err(), ShiftError::EncodeError(_)));
    }

    #[test]
    fn test_dimension_validation_failure() {
        let (writer, _written) = mock_writer();
        let reader = MockReader {
            sniffed: ImageFormat::Jpeg,
            should_fail: false,
            mock_image: Some(RgbaImage::new(0, 8)),
        };
        let pipeline = ColorShiftPipeline::with_custom(reader, writer, ShiftConfig::default());

        let result = pipeline.shift(b"fake jpeg data", 10);

        assert!(matches!(result.unwrap_err(), ShiftError::InvalidDimensions(0, 8)));
    }

    #[test]
    fn test_dimension_validation_disabled() {
        let (writer, _written) = mock_writer();
        let reader = MockReader {
            sniffed: ImageFormat::Jpeg,
            should_fail: false,
            mock_image: Some(RgbaImage::new(0, 8)),
        };
        let config = ShiftConfig::builder()
            .validate_dimensions(false)
            .build();
        let pipeline = ColorShiftPipeline::with_custom(reader, writer, config);

        let shifted = pipeline.shift(b"fake jpeg data", 10).unwrap();

        assert_eq!(shifted.dimensions(), (0, 8));
    }

    #[test]
    fn test_set_config() {
        let (writer, _written) = mock_writer();
        let mut pipeline = ColorShiftPipeline::with_custom(
            MockReader::jpeg(),
            writer,
            ShiftConfig::default(),
        );

        pipeline.set_config(ShiftConfig::builder().quality(80).build());

        assert_eq!(pipeline.config().quality, 80);
    }
}
