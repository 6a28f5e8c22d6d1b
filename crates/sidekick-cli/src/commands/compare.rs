use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sidekick_core::compare::{compare, ComparisonMode, ComparisonRequest};
use sidekick_core::config::SidekickConfig;
use sidekick_core::io::image_io::save_image;

use crate::settings::load_input;

#[derive(Args)]
pub struct CompareArgs {
    /// First image (reference size)
    pub image_a: PathBuf,

    /// Second image, resampled to the first when sizes differ
    pub image_b: PathBuf,

    /// Comparison type (side_by_side, overlay, difference, grid)
    #[arg(long)]
    pub mode: Option<ComparisonMode>,

    /// Label for the first image
    #[arg(long)]
    pub label_a: Option<String>,

    /// Label for the second image
    #[arg(long)]
    pub label_b: Option<String>,

    /// Weight of the second image in overlay mode (0-1)
    #[arg(long)]
    pub opacity: Option<f32>,

    /// Hide similarity and quality scores
    #[arg(long)]
    pub no_metrics: bool,

    /// Hide image labels
    #[arg(long)]
    pub no_labels: bool,

    /// Output file path (PNG or TIFF)
    #[arg(short, long, default_value = "comparison.png")]
    pub output: PathBuf,
}

pub fn run(args: &CompareArgs, config: &SidekickConfig) -> Result<()> {
    let a = load_input(&args.image_a, config)?;
    let b = load_input(&args.image_b, config)?;

    let defaults = &config.comparison;
    let request = ComparisonRequest {
        mode: args.mode.unwrap_or(defaults.mode),
        label_a: args.label_a.clone().unwrap_or_else(|| defaults.label_a.clone()),
        label_b: args.label_b.clone().unwrap_or_else(|| defaults.label_b.clone()),
        show_metrics: defaults.show_metrics && !args.no_metrics,
        show_labels: defaults.show_labels && !args.no_labels,
        overlay_opacity: args.opacity.unwrap_or(defaults.overlay_opacity),
    };

    let result = compare(&a, &b, &request).context("Comparison failed")?;

    save_image(&result.image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    crate::summary::print_comparison_summary(&request, &result, &args.output);

    Ok(())
}
