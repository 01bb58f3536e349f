//! Color shift configuration types

use std::path::PathBuf;

/// Destination used when no output path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "./images/output.jpeg";

/// Highest JPEG quality accepted by the encoder.
pub const MAX_QUALITY: u8 = 100;

/// Configuration for the JPEG color shift
#[derive(Debug, Clone)]
pub struct ShiftConfig {
    /// Where the shifted JPEG is written. Existing files are overwritten.
    pub output_path: PathBuf,
    /// JPEG encoder quality, 1-100
    pub quality: u8,
    /// File extensions (without the dot) accepted for input files.
    /// Matching is exact and case-sensitive.
    pub accepted_extensions: Vec<String>,
    /// Whether to reject images with a zero width or height
    pub validate_dimensions: bool,
    /// Whether to run the transform across rows with rayon
    pub parallel: bool,
    /// Whether to create missing parent directories of `output_path`
    pub create_output_dir: bool,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            quality: MAX_QUALITY,
            accepted_extensions: vec!["jpeg".to_string()],
            validate_dimensions: true,
            parallel: false,
            create_output_dir: false,
        }
    }
}

impl ShiftConfig {
    pub fn builder() -> ShiftConfigBuilder {
        ShiftConfigBuilder::default()
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepted_extensions.iter().any(|accepted| accepted == extension)
    }
}

/// Builder for ShiftConfig
#[derive(Default)]
pub struct ShiftConfigBuilder {
    output_path: Option<PathBuf>,
    quality: Option<u8>,
    accepted_extensions: Option<Vec<String>>,
    validate_dimensions: Option<bool>,
    parallel: Option<bool>,
    create_output_dir: Option<bool>,
}

impl ShiftConfigBuilder {
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Clamped to 1-100.
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.clamp(1, MAX_QUALITY));
        self
    }

    pub fn accepted_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn create_output_dir(mut self, enable: bool) -> Self {
        self.create_output_dir = Some(enable);
        self
    }

    pub fn build(self) -> ShiftConfig {
        let default = ShiftConfig::default();
        ShiftConfig {
            output_path: self.output_path.unwrap_or(default.output_path),
            quality: self.quality.unwrap_or(default.quality),
            accepted_extensions: self.accepted_extensions.unwrap_or(default.accepted_extensions),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            parallel: self.parallel.unwrap_or(default.parallel),
            create_output_dir: self.create_output_dir.unwrap_or(default.create_output_dir),
        }
    }
}
