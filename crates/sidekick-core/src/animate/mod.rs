pub mod easing;
pub mod motion;

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{MAX_FRAME_COUNT, PARALLEL_FRAME_THRESHOLD};
use crate::error::{Result, SidekickError};
use crate::frame::{FrameSequence, ImageBuffer};

pub use easing::Easing;
pub use motion::AnimationKind;

/// Parameters for expanding a still image into an animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationRequest {
    pub kind: AnimationKind,
    /// Length in seconds, > 0.
    pub duration: f64,
    /// Frames per second, >= 1.
    pub fps: u32,
    /// Motion strength, >= 0.
    pub intensity: f64,
    pub easing: Easing,
    /// Append the reversed interior frames for a ping-pong loop.
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Default for AnimationRequest {
    fn default() -> Self {
        Self {
            kind: AnimationKind::ZoomIn,
            duration: 2.0,
            fps: 30,
            intensity: 1.0,
            easing: Easing::EaseOut,
            looped: false,
        }
    }
}

impl AnimationRequest {
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SidekickError::InvalidRequest(format!(
                "duration must be > 0, got {}",
                self.duration
            )));
        }
        if self.fps < 1 {
            return Err(SidekickError::InvalidRequest(
                "fps must be at least 1".into(),
            ));
        }
        let frames = (self.duration * self.fps as f64).round();
        if frames > MAX_FRAME_COUNT as f64 {
            return Err(SidekickError::InvalidRequest(format!(
                "{}s at {} fps needs {frames} frames, at most {MAX_FRAME_COUNT} are supported",
                self.duration, self.fps
            )));
        }
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(SidekickError::InvalidRequest(format!(
                "intensity must be >= 0, got {}",
                self.intensity
            )));
        }
        Ok(())
    }

    /// Number of frames before looping: `round(duration * fps)`, at least 1.
    /// Only meaningful for a request that passed [`validate`](Self::validate).
    pub fn total_frames(&self) -> usize {
        ((self.duration * self.fps as f64).round() as usize).max(1)
    }

    /// Human-readable summary of the request and the produced sequence.
    pub fn report(&self, frames: &FrameSequence) -> String {
        let mut report = String::from("Animation Generated:\n");
        report.push_str(&format!("- Type: {}\n", self.kind));
        report.push_str(&format!("- Duration: {}s\n", self.duration));
        report.push_str(&format!("- FPS: {}\n", self.fps));
        report.push_str(&format!("- Total Frames: {}\n", frames.len()));
        report.push_str(&format!("- Intensity: {}\n", self.intensity));
        report.push_str(&format!("- Easing: {}\n", self.easing));
        report.push_str(&format!("- Loop: {}\n", self.looped));
        report
    }
}

/// Raw progress of frame `index` out of `total`, in [0, 1].
pub fn progress(index: usize, total: usize) -> f64 {
    if total > 1 {
        index as f64 / (total - 1) as f64
    } else {
        0.0
    }
}

/// Expand `image` into the frame sequence described by `request`.
///
/// The source is never modified. With `looped` set and more than one frame,
/// frames `n-2 ..= 1` are appended in reverse, sharing the forward frames.
pub fn animate(image: &ImageBuffer, request: &AnimationRequest) -> Result<FrameSequence> {
    request.validate()?;

    let total = request.total_frames();
    debug!(
        kind = %request.kind,
        easing = %request.easing,
        intensity = request.intensity,
        total,
        size = %image,
        "Generating animation frames"
    );

    let render = |i: usize| -> Arc<ImageBuffer> {
        let eased = request.easing.apply(progress(i, total));
        Arc::new(motion::render_frame(
            image,
            request.kind,
            eased,
            request.intensity,
        ))
    };

    let mut frames: Vec<Arc<ImageBuffer>> = if total >= PARALLEL_FRAME_THRESHOLD {
        (0..total).into_par_iter().map(render).collect()
    } else {
        (0..total).map(render).collect()
    };

    if request.looped && frames.len() > 1 {
        let back: Vec<Arc<ImageBuffer>> = frames[1..frames.len() - 1]
            .iter()
            .rev()
            .cloned()
            .collect();
        frames.extend(back);
        debug!(frames = frames.len(), "Appended ping-pong loop");
    }

    FrameSequence::new(frames, request.fps)
}
