use serde::{Deserialize, Serialize};

use crate::animate::AnimationRequest;
use crate::compare::ComparisonRequest;
use crate::error::{Result, SidekickError};
use crate::lineart::CleanupRequest;

/// Persisted defaults for every engine. Each section falls back to its own
/// defaults when missing, so partial files are valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SidekickConfig {
    #[serde(default)]
    pub animation: AnimationRequest,
    #[serde(default)]
    pub comparison: ComparisonRequest,
    #[serde(default)]
    pub line_art: CleanupRequest,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Longest side, in pixels, an input may have before it is downscaled.
    pub max_image_size: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_image_size: 2048,
        }
    }
}

impl SidekickConfig {
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;
        self.comparison.validate()?;
        self.line_art.validate()?;
        if self.processing.max_image_size == 0 {
            return Err(SidekickError::InvalidRequest(
                "max_image_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
