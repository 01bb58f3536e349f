use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jpeg_color_shift::image_pipeline::{
    ColorShiftPipeline, DEFAULT_OUTPUT_PATH, ShiftConfig, parse_percentage,
};
use jpeg_color_shift::logger;

use tracing::info;

/// Shift the red or blue channel of a JPEG image.
///
/// A positive percentage raises red, a negative one raises blue.
#[derive(Parser)]
#[command(name = "jpeg_color_shift", version, about)]
struct Cli {
    /// Path to a .jpeg file
    input: PathBuf,

    /// Signed shift percentage, e.g. 50 or -30
    #[arg(value_parser = parse_percentage, allow_negative_numbers = true)]
    percentage: i64,

    /// Destination of the shifted image
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// JPEG encoder quality
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Also accept the .jpg extension
    #[arg(long)]
    jpg: bool,

    /// Shift rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Create missing directories for the output path
    #[arg(long)]
    create_dirs: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init();

    let extensions: &[&str] = if cli.jpg { &["jpeg", "jpg"] } else { &["jpeg"] };
    let config = ShiftConfig::builder()
        .output_path(cli.output)
        .quality(cli.quality)
        .accepted_extensions(extensions.iter().copied())
        .parallel(cli.parallel)
        .create_output_dir(cli.create_dirs)
        .build();
    let pipeline = ColorShiftPipeline::new(config);

    let written = pipeline
        .convert_file(&cli.input, cli.percentage)
        .with_context(|| format!("could not shift colors of {}", cli.input.display()))?;

    info!("Wrote {}", written.display());
    Ok(())
}
