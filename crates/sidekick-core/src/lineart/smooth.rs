use ndarray::Array2;

/// 3-tap binomial kernel, the 3x3 Gaussian used for line smoothing.
const KERNEL: [f32; 3] = [0.25, 0.5, 0.25];

/// Separable 3x3 Gaussian blur of an 8-bit plane. The border is mirrored
/// without repeating the edge pixel (index -1 reads index 1).
pub fn gaussian_3x3(plane: &Array2<u8>) -> Array2<u8> {
    let (h, w) = plane.dim();
    let src = plane.mapv(f32::from);

    let mut rows = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            rows[[row, col]] = KERNEL
                .iter()
                .enumerate()
                .map(|(ki, &kv)| {
                    let c = reflect_101(col as isize + ki as isize - 1, w);
                    src[[row, c]] * kv
                })
                .sum();
        }
    }

    let mut result = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let v: f32 = KERNEL
                .iter()
                .enumerate()
                .map(|(ki, &kv)| {
                    let r = reflect_101(row as isize + ki as isize - 1, h);
                    rows[[r, col]] * kv
                })
                .sum();
            result[[row, col]] = v.round().clamp(0.0, 255.0) as u8;
        }
    }

    result
}

/// Mirror an out-of-range index back into `0..len` about the edge pixel.
fn reflect_101(i: isize, len: usize) -> usize {
    let last = len as isize - 1;
    if last <= 0 {
        return 0;
    }
    let i = if i < 0 { -i } else { i };
    let i = if i > last { 2 * last - i } else { i };
    i.clamp(0, last) as usize
}
