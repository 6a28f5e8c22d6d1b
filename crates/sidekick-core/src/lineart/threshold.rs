use ndarray::{Array2, Axis};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::frame::ImageBuffer;

/// Quantize a normalized value to 8 bits, truncating.
pub fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// BT.601 luminance of the 8-bit quantized image.
pub fn luminance_u8(image: &ImageBuffer) -> Array2<u8> {
    image.data.map_axis(Axis(2), |px| {
        let r = quantize(px[0]) as f32;
        let g = quantize(px[1]) as f32;
        let b = quantize(px[2]) as f32;
        (LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b)
            .round()
            .clamp(0.0, 255.0) as u8
    })
}

/// 255 where `value > level`, 0 elsewhere.
pub fn binary_threshold(plane: &Array2<u8>, level: u8) -> Array2<u8> {
    plane.mapv(|v| if v > level { 255 } else { 0 })
}
