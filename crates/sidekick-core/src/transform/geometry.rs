use ndarray::{concatenate, s, Array3, Axis};

use crate::error::{Result, SidekickError};

use super::build_pixels;
use super::resample::sample_zero_fill;

/// Copy out the `height x width` region whose top-left corner is `(top, left)`.
pub fn crop(
    data: &Array3<f32>,
    top: usize,
    left: usize,
    height: usize,
    width: usize,
) -> Array3<f32> {
    data.slice(s![top..top + height, left..left + width, ..])
        .to_owned()
}

/// Move content by whole pixels. Positive offsets move content right/down.
/// Pixels pushed past the border are dropped; vacated pixels are zero.
pub fn translate(data: &Array3<f32>, offset_y: i64, offset_x: i64) -> Array3<f32> {
    let (h, w, _) = data.dim();
    let mut shifted = Array3::<f32>::zeros(data.raw_dim());

    let (src_y1, src_y2, dst_y1) = overlap(h as i64, offset_y);
    let (src_x1, src_x2, dst_x1) = overlap(w as i64, offset_x);

    if src_y2 > src_y1 && src_x2 > src_x1 {
        let rows = src_y2 - src_y1;
        let cols = src_x2 - src_x1;
        shifted
            .slice_mut(s![dst_y1..dst_y1 + rows, dst_x1..dst_x1 + cols, ..])
            .assign(&data.slice(s![src_y1..src_y2, src_x1..src_x2, ..]));
    }

    shifted
}

/// Source span `[start, end)` that stays inside an axis of length `len`
/// after moving by `offset`, and the destination start of that span.
fn overlap(len: i64, offset: i64) -> (usize, usize, usize) {
    let start = (-offset).max(0);
    let end = (len - offset).min(len);
    let dst = offset.max(0);
    if end <= start || dst >= len {
        return (0, 0, 0);
    }
    (start as usize, end as usize, dst as usize)
}

/// Rotate counter-clockwise (as displayed) by `degrees` about the raster
/// center. Output keeps the input size; uncovered pixels are zero.
pub fn rotate(data: &Array3<f32>, degrees: f64) -> Array3<f32> {
    let (h, w, _) = data.dim();
    if degrees % 360.0 == 0.0 {
        return data.clone();
    }

    let (sin, cos) = degrees.to_radians().sin_cos();
    let cy = (h as f64 - 1.0) / 2.0;
    let cx = (w as f64 - 1.0) / 2.0;

    build_pixels(h, w, |row, col| {
        let dy = row as f64 - cy;
        let dx = col as f64 - cx;
        let src_x = cx + dx * cos - dy * sin;
        let src_y = cy + dx * sin + dy * cos;
        sample_zero_fill(data, src_y, src_x)
    })
}

/// Place `right` after `left` along the width axis.
pub fn concat_width(left: &Array3<f32>, right: &Array3<f32>) -> Result<Array3<f32>> {
    concatenate(Axis(1), &[left.view(), right.view()])
        .map_err(|e| SidekickError::InvalidRequest(format!("width concatenation: {e}")))
}

/// Place `bottom` below `top` along the height axis.
pub fn concat_height(top: &Array3<f32>, bottom: &Array3<f32>) -> Result<Array3<f32>> {
    concatenate(Axis(0), &[top.view(), bottom.view()])
        .map_err(|e| SidekickError::InvalidRequest(format!("height concatenation: {e}")))
}
