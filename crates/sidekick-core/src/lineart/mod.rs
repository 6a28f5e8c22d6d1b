//! Line-art cleanup: binarize a drawing, close gaps, drop stray specks and
//! optionally smooth and equalize the result.

pub mod components;
pub mod histogram;
pub mod morphology;
pub mod smooth;
pub mod threshold;

use ndarray::{Array2, Array3, Zip};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{COLOR_CHANNEL_COUNT, MIN_ARTIFACT_AREA, SMOOTH_RETHRESHOLD};
use crate::error::{Result, SidekickError};
use crate::frame::ImageBuffer;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupRequest {
    /// Binarization level in [0, 1]; brighter pixels become paper.
    pub threshold: f32,
    /// Morphology strength in [0, 1]; 0 disables close/open.
    pub noise_reduction: f32,
    /// Stroke weight; values rounding above 1 thicken dark lines.
    pub line_thickness: f32,
    pub auto_contrast: bool,
    pub remove_artifacts: bool,
    pub smooth_lines: bool,
}

impl Default for CleanupRequest {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            noise_reduction: 0.3,
            line_thickness: 1.0,
            auto_contrast: true,
            remove_artifacts: true,
            smooth_lines: false,
        }
    }
}

impl CleanupRequest {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SidekickError::InvalidRequest(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.noise_reduction) {
            return Err(SidekickError::InvalidRequest(format!(
                "noise reduction must be within [0, 1], got {}",
                self.noise_reduction
            )));
        }
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(SidekickError::InvalidRequest(format!(
                "line thickness must be > 0, got {}",
                self.line_thickness
            )));
        }
        Ok(())
    }

    /// Square kernel size for the close/open pass, 0 when disabled.
    pub fn noise_kernel(&self) -> usize {
        if self.noise_reduction > 0.0 {
            ((self.noise_reduction * 5.0) as usize).max(1)
        } else {
            0
        }
    }

    fn report(&self) -> String {
        let mut report = String::from("Line Art Cleanup Applied:\n");
        report.push_str(&format!("- Threshold: {}\n", self.threshold));
        report.push_str(&format!("- Noise Reduction: {}\n", self.noise_reduction));
        report.push_str(&format!("- Line Thickness: {}\n", self.line_thickness));
        report.push_str(&format!("- Auto Contrast: {}\n", self.auto_contrast));
        report.push_str(&format!("- Remove Artifacts: {}\n", self.remove_artifacts));
        report.push_str(&format!("- Smooth Lines: {}\n", self.smooth_lines));
        report
    }
}

#[derive(Clone, Debug)]
pub struct CleanupResult {
    /// Cleaned drawing, gray replicated across RGB.
    pub image: ImageBuffer,
    pub report: String,
}

/// Clean up a line drawing: dark strokes on light paper.
pub fn cleanup(image: &ImageBuffer, request: &CleanupRequest) -> Result<CleanupResult> {
    request.validate()?;

    let gray = threshold::luminance_u8(image);
    let level = (request.threshold * 255.0) as u8;
    let mut plane = threshold::binary_threshold(&gray, level);

    let k = request.noise_kernel();
    if k > 0 {
        plane = morphology::close(&plane, k);
        plane = morphology::open(&plane, k);
    }

    if request.remove_artifacts {
        let removed = remove_specks(&mut plane, MIN_ARTIFACT_AREA);
        debug!(removed, "Removed small ink components");
    }

    let stroke = request.line_thickness.round() as usize;
    if stroke > 1 {
        plane = morphology::erode(&plane, stroke);
    }

    if request.smooth_lines {
        plane = threshold::binary_threshold(&smooth::gaussian_3x3(&plane), SMOOTH_RETHRESHOLD);
    }

    if request.auto_contrast {
        plane = histogram::equalize(&plane);
    }

    Ok(CleanupResult {
        image: plane_to_rgb(&plane)?,
        report: request.report(),
    })
}

/// Paint ink (zero) components smaller than `min_area` pixels white.
/// Returns how many components were removed.
pub fn remove_specks(plane: &mut Array2<u8>, min_area: usize) -> usize {
    let ink = plane.mapv(|v| v == 0);
    let (labels, components) = components::label_components(&ink);

    let small: Vec<u32> = components
        .iter()
        .filter(|c| c.area < min_area)
        .map(|c| c.label)
        .collect();
    if small.is_empty() {
        return 0;
    }

    Zip::from(plane).and(&labels).for_each(|v, &lbl| {
        if lbl != 0 && small.contains(&lbl) {
            *v = 255;
        }
    });
    small.len()
}

fn plane_to_rgb(plane: &Array2<u8>) -> Result<ImageBuffer> {
    let (h, w) = plane.dim();
    ImageBuffer::new(Array3::from_shape_fn(
        (h, w, COLOR_CHANNEL_COUNT),
        |(row, col, _)| plane[[row, col]] as f32 / 255.0,
    ))
}
