use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sidekick_core::config::SidekickConfig;
use sidekick_core::io::image_io::save_image;
use sidekick_core::lineart::{cleanup, CleanupRequest};

use crate::settings::load_input;

#[derive(Args)]
pub struct CleanupArgs {
    /// Input drawing
    pub file: PathBuf,

    /// Binarization threshold (0-1)
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Morphological noise reduction strength (0-1)
    #[arg(long)]
    pub noise_reduction: Option<f32>,

    /// Stroke weight; 2 or more thickens lines
    #[arg(long)]
    pub line_thickness: Option<f32>,

    /// Skip histogram equalization
    #[arg(long)]
    pub no_auto_contrast: bool,

    /// Keep small specks
    #[arg(long)]
    pub keep_artifacts: bool,

    /// Smooth jagged strokes
    #[arg(long)]
    pub smooth_lines: bool,

    /// Output file path (PNG or TIFF)
    #[arg(short, long, default_value = "cleaned.png")]
    pub output: PathBuf,
}

pub fn run(args: &CleanupArgs, config: &SidekickConfig) -> Result<()> {
    let image = load_input(&args.file, config)?;

    let defaults = &config.line_art;
    let request = CleanupRequest {
        threshold: args.threshold.unwrap_or(defaults.threshold),
        noise_reduction: args.noise_reduction.unwrap_or(defaults.noise_reduction),
        line_thickness: args.line_thickness.unwrap_or(defaults.line_thickness),
        auto_contrast: defaults.auto_contrast && !args.no_auto_contrast,
        remove_artifacts: defaults.remove_artifacts && !args.keep_artifacts,
        smooth_lines: defaults.smooth_lines || args.smooth_lines,
    };

    let result = cleanup(&image, &request).context("Line-art cleanup failed")?;

    save_image(&result.image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    print!("{}", result.report);
    println!("Saved to {}", args.output.display());

    Ok(())
}
