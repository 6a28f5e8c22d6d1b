pub mod compose;
pub mod metrics;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SidekickError};
use crate::frame::ImageBuffer;
use crate::transform::resize_bilinear;

/// How two images are composed into one visualization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    #[default]
    SideBySide,
    Overlay,
    Difference,
    Grid,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 4] = [
        ComparisonMode::SideBySide,
        ComparisonMode::Overlay,
        ComparisonMode::Difference,
        ComparisonMode::Grid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SideBySide => "side_by_side",
            Self::Overlay => "overlay",
            Self::Difference => "difference",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComparisonMode {
    type Err = SidekickError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| SidekickError::InvalidRequest(format!("unknown comparison type '{s}'")))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonRequest {
    pub mode: ComparisonMode,
    pub label_a: String,
    pub label_b: String,
    pub show_metrics: bool,
    pub show_labels: bool,
    /// Weight of B in overlay mode, in [0, 1].
    pub overlay_opacity: f32,
}

impl Default for ComparisonRequest {
    fn default() -> Self {
        Self {
            mode: ComparisonMode::SideBySide,
            label_a: "Image A".into(),
            label_b: "Image B".into(),
            show_metrics: true,
            show_labels: true,
            overlay_opacity: 0.5,
        }
    }
}

impl ComparisonRequest {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(SidekickError::InvalidRequest(format!(
                "overlay opacity must be within [0, 1], got {}",
                self.overlay_opacity
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ComparisonResult {
    pub image: ImageBuffer,
    pub report: String,
    /// `1 / (1 + MSE)`, in (0, 1].
    pub similarity: f64,
    /// Variance ratio, in [0, 1].
    pub quality: f64,
    pub show_metrics: bool,
    pub show_labels: bool,
}

/// Compare `a` against `b`. B is resampled to A's size when they differ.
pub fn compare(
    a: &ImageBuffer,
    b: &ImageBuffer,
    request: &ComparisonRequest,
) -> Result<ComparisonResult> {
    request.validate()?;

    let (h, w) = a.dims();
    let aligned;
    let b_data = if b.dims() != (h, w) {
        debug!(from = %b, to = %a, "Resampling image B to match image A");
        aligned = resize_bilinear(&b.data, h, w);
        &aligned
    } else {
        &b.data
    };

    let similarity = metrics::similarity_score(&a.data, b_data);
    let quality = metrics::quality_score(&a.data, b_data);

    let composed = match request.mode {
        ComparisonMode::SideBySide => compose::side_by_side(&a.data, b_data)?,
        ComparisonMode::Overlay => compose::overlay(&a.data, b_data, request.overlay_opacity),
        ComparisonMode::Difference => compose::difference(&a.data, b_data),
        ComparisonMode::Grid => compose::grid(&a.data, b_data)?,
    };
    let image = ImageBuffer::new(composed)?;

    debug!(
        mode = %request.mode,
        similarity,
        quality,
        output = %image,
        "Comparison complete"
    );

    let report = build_report(request, similarity, quality, &image);

    Ok(ComparisonResult {
        image,
        report,
        similarity,
        quality,
        show_metrics: request.show_metrics,
        show_labels: request.show_labels,
    })
}

fn build_report(
    request: &ComparisonRequest,
    similarity: f64,
    quality: f64,
    image: &ImageBuffer,
) -> String {
    let mut report = String::from("A/B Comparison Analysis:\n");
    report.push_str(&format!("- Comparison Type: {}\n", request.mode));
    report.push_str(&format!("- Image A: {}\n", request.label_a));
    report.push_str(&format!("- Image B: {}\n", request.label_b));
    report.push_str(&format!("- Similarity Score: {similarity:.3}\n"));
    report.push_str(&format!("- Quality Score: {quality:.3}\n"));
    report.push_str(&format!("- Output Dimensions: {image}px\n"));
    report
}
