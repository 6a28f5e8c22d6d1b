use std::fmt;
use std::sync::Arc;

use ndarray::{Array3, ArrayD, Axis, Ix3};
use serde::{Deserialize, Serialize};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, SidekickError};

/// Axis order of a tensor handed over by a producer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    /// (height, width, channels)
    #[default]
    ChannelLast,
    /// (channels, height, width)
    ChannelFirst,
}

/// A 3-channel RGB raster.
/// Pixel values are f32, nominally in [0.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    /// Pixel data, row-major, shape = (height, width, 3)
    pub data: Array3<f32>,
}

impl ImageBuffer {
    /// Wrap an HWC array. The last axis must hold exactly three channels and
    /// both spatial axes must be non-empty.
    pub fn new(data: Array3<f32>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if c != COLOR_CHANNEL_COUNT {
            return Err(SidekickError::InvalidRequest(format!(
                "expected {COLOR_CHANNEL_COUNT} color channels, got {c}"
            )));
        }
        if h == 0 || w == 0 {
            return Err(SidekickError::DegenerateInput(format!(
                "empty raster ({w}x{h})"
            )));
        }
        Ok(Self { data })
    }

    /// A buffer with every value set to `value`.
    pub fn filled(height: usize, width: usize, value: f32) -> Result<Self> {
        Self::new(Array3::from_elem((height, width, COLOR_CHANNEL_COUNT), value))
    }

    /// Normalize a producer tensor into the canonical HWC layout.
    ///
    /// Accepts rank 3 tensors, or rank 4 tensors whose leading batch axis has
    /// size 1 (the batch axis is stripped).
    pub fn from_tensor(tensor: ArrayD<f32>, layout: ChannelLayout) -> Result<Self> {
        let tensor = match tensor.ndim() {
            3 => tensor,
            4 if tensor.shape()[0] == 1 => tensor.index_axis_move(Axis(0), 0),
            4 => {
                return Err(SidekickError::InvalidRequest(format!(
                    "batch dimension must be 1, got {}",
                    tensor.shape()[0]
                )))
            }
            n => {
                return Err(SidekickError::InvalidRequest(format!(
                    "expected a rank 3 or 4 tensor, got rank {n}"
                )))
            }
        };

        let data = tensor
            .into_dimensionality::<Ix3>()
            .map_err(|e| SidekickError::InvalidRequest(e.to_string()))?;

        let data = match layout {
            ChannelLayout::ChannelLast => data,
            ChannelLayout::ChannelFirst => data
                .permuted_axes([1, 2, 0])
                .as_standard_layout()
                .to_owned(),
        };

        Self::new(data)
    }

    /// Export as a (channels, height, width) array.
    pub fn to_chw(&self) -> Array3<f32> {
        self.data
            .view()
            .permuted_axes([2, 0, 1])
            .as_standard_layout()
            .to_owned()
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// (height, width)
    pub fn dims(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Apply `f` to every value, clamping the result to [0, 1].
    pub fn map_clamped(&self, f: impl Fn(f32) -> f32) -> ImageBuffer {
        ImageBuffer {
            data: self.data.mapv(|v| f(v).clamp(0.0, 1.0)),
        }
    }
}

impl fmt::Display for ImageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// Ordered frames of an animation. Frame 0 is shown first.
///
/// Frames are shared handles: a ping-pong loop repeats the forward frames
/// rather than recomputing them.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<Arc<ImageBuffer>>,
    fps: u32,
}

impl FrameSequence {
    pub fn new(frames: Vec<Arc<ImageBuffer>>, fps: u32) -> Result<Self> {
        let first = frames.first().ok_or(SidekickError::EmptySequence)?;
        let dims = first.dims();
        if let Some((i, bad)) = frames.iter().enumerate().find(|(_, f)| f.dims() != dims) {
            return Err(SidekickError::InvalidRequest(format!(
                "frame {i} is {bad}, expected {}x{}",
                dims.1, dims.0
            )));
        }
        Ok(Self { frames, fps })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frames(&self) -> &[Arc<ImageBuffer>] {
        &self.frames
    }

    /// (height, width) shared by every frame.
    pub fn dims(&self) -> (usize, usize) {
        self.frames[0].dims()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageBuffer> {
        self.frames.iter().map(|f| f.as_ref())
    }

    pub fn into_frames(self) -> Vec<Arc<ImageBuffer>> {
        self.frames
    }
}
