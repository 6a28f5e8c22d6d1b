use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;

use super::build_pixels;

/// Resize with bilinear interpolation using half-pixel centers
/// (`align_corners = false`): output pixel `i` samples source coordinate
/// `(i + 0.5) * in / out - 0.5`, clamped to the source edge.
pub fn resize_bilinear(data: &Array3<f32>, out_h: usize, out_w: usize) -> Array3<f32> {
    let (h, w, _) = data.dim();
    if (h, w) == (out_h, out_w) {
        return data.clone();
    }

    let rows: Vec<Tap> = (0..out_h).map(|i| Tap::new(i, h, out_h)).collect();
    let cols: Vec<Tap> = (0..out_w).map(|i| Tap::new(i, w, out_w)).collect();

    build_pixels(out_h, out_w, |row, col| {
        let ty = &rows[row];
        let tx = &cols[col];
        let mut px = [0.0f32; COLOR_CHANNEL_COUNT];
        for (ch, v) in px.iter_mut().enumerate() {
            let top =
                data[[ty.i0, tx.i0, ch]] * (1.0 - tx.frac) + data[[ty.i0, tx.i1, ch]] * tx.frac;
            let bottom =
                data[[ty.i1, tx.i0, ch]] * (1.0 - tx.frac) + data[[ty.i1, tx.i1, ch]] * tx.frac;
            *v = top * (1.0 - ty.frac) + bottom * ty.frac;
        }
        px
    })
}

/// Downscale so the longer side is at most `max_side`, keeping the aspect
/// ratio. Rasters already within bounds are returned as-is.
pub fn fit_within(data: &Array3<f32>, max_side: usize) -> Array3<f32> {
    let (h, w, _) = data.dim();
    let longest = h.max(w);
    if longest <= max_side || max_side == 0 {
        return data.clone();
    }
    let scale = max_side as f64 / longest as f64;
    let out_h = ((h as f64 * scale).round() as usize).clamp(1, max_side);
    let out_w = ((w as f64 * scale).round() as usize).clamp(1, max_side);
    resize_bilinear(data, out_h, out_w)
}

/// Source neighbours and weight for one output index along one axis.
struct Tap {
    i0: usize,
    i1: usize,
    frac: f32,
}

impl Tap {
    fn new(dst: usize, in_len: usize, out_len: usize) -> Self {
        let scale = in_len as f64 / out_len as f64;
        let src = ((dst as f64 + 0.5) * scale - 0.5).max(0.0);
        let i0 = (src.floor() as usize).min(in_len - 1);
        let i1 = (i0 + 1).min(in_len - 1);
        Self {
            i0,
            i1,
            frac: (src - i0 as f64) as f32,
        }
    }
}

/// Bilinear sample at fractional `(y, x)`. Neighbours outside the raster
/// contribute zero.
pub fn sample_zero_fill(data: &Array3<f32>, y: f64, x: f64) -> [f32; COLOR_CHANNEL_COUNT] {
    let (h, w, _) = data.dim();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let sample = |r: i64, c: i64, ch: usize| -> f32 {
        if r >= 0 && r < h as i64 && c >= 0 && c < w as i64 {
            data[[r as usize, c as usize, ch]]
        } else {
            0.0
        }
    };

    let mut px = [0.0f32; COLOR_CHANNEL_COUNT];
    for (ch, v) in px.iter_mut().enumerate() {
        let v00 = sample(y0, x0, ch);
        let v10 = sample(y0, x1, ch);
        let v01 = sample(y1, x0, ch);
        let v11 = sample(y1, x1, ch);
        *v = v00 * (1.0 - fx) * (1.0 - fy)
            + v10 * fx * (1.0 - fy)
            + v01 * (1.0 - fx) * fy
            + v11 * fx * fy;
    }
    px
}
