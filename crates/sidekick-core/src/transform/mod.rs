pub mod geometry;
pub mod resample;

use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayViewMut2, Axis};

use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};

pub use geometry::{concat_height, concat_width, crop, rotate, translate};
pub use resample::{fit_within, resize_bilinear, sample_zero_fill};

/// Build an (h, w, 3) array by evaluating `pixel(row, col)` for every output
/// pixel. Rows are filled in parallel for large outputs.
pub(crate) fn build_pixels<F>(h: usize, w: usize, pixel: F) -> Array3<f32>
where
    F: Fn(usize, usize) -> [f32; COLOR_CHANNEL_COUNT] + Sync,
{
    let mut out = Array3::<f32>::zeros((h, w, COLOR_CHANNEL_COUNT));

    let fill_row = |row: usize, mut dst: ArrayViewMut2<f32>| {
        for col in 0..w {
            for (ch, v) in pixel(row, col).into_iter().enumerate() {
                dst[[col, ch]] = v;
            }
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, dst)| fill_row(row, dst));
    } else {
        for (row, dst) in out.axis_iter_mut(Axis(0)).enumerate() {
            fill_row(row, dst);
        }
    }

    out
}
