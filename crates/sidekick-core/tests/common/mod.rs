#![allow(dead_code)]

use ndarray::Array3;
use sidekick_core::frame::ImageBuffer;

/// Uniform image with every channel set to `value`.
pub fn flat(height: usize, width: usize, value: f32) -> ImageBuffer {
    ImageBuffer::filled(height, width, value).expect("non-empty image")
}

/// Image whose every channel holds `f(row, col)`.
pub fn from_fn(height: usize, width: usize, f: impl Fn(usize, usize) -> f32) -> ImageBuffer {
    let data = Array3::from_shape_fn((height, width, 3), |(r, c, _)| f(r, c));
    ImageBuffer::new(data).expect("non-empty image")
}

/// Distinct value per pixel, increasing in raster order, within [0, 1].
pub fn ramp(height: usize, width: usize) -> ImageBuffer {
    let max = (height * width - 1).max(1) as f32;
    from_fn(height, width, |r, c| (r * width + c) as f32 / max)
}

/// Image with distinct values per channel, useful for layout checks.
pub fn rgb_ramp(height: usize, width: usize) -> ImageBuffer {
    let n = (height * width * 3) as f32;
    let data = Array3::from_shape_fn((height, width, 3), |(r, c, ch)| {
        ((r * width + c) * 3 + ch) as f32 / n
    });
    ImageBuffer::new(data).expect("non-empty image")
}

/// White page with the given rectangles painted black.
/// Each rect is (top, left, height, width).
pub fn page_with_ink(
    height: usize,
    width: usize,
    rects: &[(usize, usize, usize, usize)],
) -> ImageBuffer {
    from_fn(height, width, |r, c| {
        let inked = rects
            .iter()
            .any(|&(top, left, h, w)| r >= top && r < top + h && c >= left && c < left + w);
        if inked {
            0.0
        } else {
            1.0
        }
    })
}

pub fn max_abs_diff(a: &ImageBuffer, b: &ImageBuffer) -> f32 {
    assert_eq!(a.dims(), b.dims(), "dimension mismatch");
    a.data
        .iter()
        .zip(b.data.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}
