use ndarray::Array3;

use crate::consts::{DIFFERENCE_GAIN, GRID_OVERLAY_OPACITY};
use crate::error::Result;
use crate::transform::{concat_height, concat_width};

/// A and B next to each other, A on the left.
pub fn side_by_side(a: &Array3<f32>, b: &Array3<f32>) -> Result<Array3<f32>> {
    concat_width(a, b)
}

/// Linear blend: `a * (1 - opacity) + b * opacity`.
pub fn overlay(a: &Array3<f32>, b: &Array3<f32>, opacity: f32) -> Array3<f32> {
    a * (1.0 - opacity) + b * opacity
}

/// Amplified absolute difference, clamped to [0, 1].
pub fn difference(a: &Array3<f32>, b: &Array3<f32>) -> Array3<f32> {
    let mut diff = a - b;
    diff.mapv_inplace(|v| (v.abs() * DIFFERENCE_GAIN).clamp(0.0, 1.0));
    diff
}

/// 2x2 mosaic: `[A, B]` over `[difference, 50% overlay]`.
pub fn grid(a: &Array3<f32>, b: &Array3<f32>) -> Result<Array3<f32>> {
    let top = concat_width(a, b)?;
    let bottom = concat_width(&difference(a, b), &overlay(a, b, GRID_OVERLAY_OPACITY))?;
    concat_height(&top, &bottom)
}
