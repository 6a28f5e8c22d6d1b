use std::path::Path;

use anyhow::{Context, Result};
use sidekick_core::config::SidekickConfig;
use sidekick_core::frame::ImageBuffer;
use sidekick_core::io::image_io::load_image;
use sidekick_core::transform::fit_within;
use tracing::debug;

/// Load defaults from `path`, or built-in defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<SidekickConfig> {
    let Some(path) = path else {
        return Ok(SidekickConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: SidekickConfig = toml::from_str(&contents).context("Invalid config")?;
    config
        .validate()
        .with_context(|| format!("Invalid values in {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Load an input image, downscaling it to the configured size limit.
pub fn load_input(path: &Path, config: &SidekickConfig) -> Result<ImageBuffer> {
    let image =
        load_image(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let max_side = config.processing.max_image_size;
    if image.height().max(image.width()) <= max_side {
        return Ok(image);
    }

    let data = fit_within(&image.data, max_side);
    let resized = ImageBuffer::new(data)?;
    debug!(from = %image, to = %resized, "Downscaled input");
    Ok(resized)
}
