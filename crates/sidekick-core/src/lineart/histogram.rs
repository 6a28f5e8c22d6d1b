use ndarray::Array2;

use crate::consts::HISTOGRAM_BINS;

/// 256-bin histogram of an 8-bit plane.
pub fn histogram(plane: &Array2<u8>) -> [u64; HISTOGRAM_BINS] {
    let mut bins = [0u64; HISTOGRAM_BINS];
    for &v in plane.iter() {
        bins[v as usize] += 1;
    }
    bins
}

/// Histogram equalization of an 8-bit plane.
///
/// The lowest occupied level maps to 0 and the rest follow the cumulative
/// distribution. A plane with a single occupied level is returned unchanged.
pub fn equalize(plane: &Array2<u8>) -> Array2<u8> {
    let hist = histogram(plane);
    let total = plane.len() as u64;

    let Some(first) = hist.iter().position(|&c| c > 0) else {
        return plane.clone();
    };
    if hist[first] == total {
        return plane.clone();
    }

    let scale = 255.0 / (total - hist[first]) as f64;
    let mut lut = [0u8; HISTOGRAM_BINS];
    let mut cumulative = 0u64;
    for level in first + 1..HISTOGRAM_BINS {
        cumulative += hist[level];
        lut[level] = (cumulative as f64 * scale).round().clamp(0.0, 255.0) as u8;
    }

    plane.mapv(|v| lut[v as usize])
}
