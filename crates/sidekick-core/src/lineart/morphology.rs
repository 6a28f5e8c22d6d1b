use ndarray::Array2;

/// Grayscale dilation (window maximum) with a `k x k` square kernel.
/// Neighbours outside the plane are ignored.
pub fn dilate(plane: &Array2<u8>, k: usize) -> Array2<u8> {
    window_filter(plane, k, u8::max, u8::MIN)
}

/// Grayscale erosion (window minimum) with a `k x k` square kernel.
/// Neighbours outside the plane are ignored.
pub fn erode(plane: &Array2<u8>, k: usize) -> Array2<u8> {
    window_filter(plane, k, u8::min, u8::MAX)
}

/// Dilation followed by erosion: closes small gaps in the white plane.
pub fn close(plane: &Array2<u8>, k: usize) -> Array2<u8> {
    erode(&dilate(plane, k), k)
}

/// Erosion followed by dilation: removes small white specks.
pub fn open(plane: &Array2<u8>, k: usize) -> Array2<u8> {
    dilate(&erode(plane, k), k)
}

/// Separable square-window reduction. The window for index `i` spans
/// `i - k/2 ..= i - k/2 + k - 1`.
fn window_filter(plane: &Array2<u8>, k: usize, pick: fn(u8, u8) -> u8, identity: u8) -> Array2<u8> {
    if k <= 1 {
        return plane.clone();
    }
    let (h, w) = plane.dim();
    let anchor = k / 2;

    let span = |i: usize, len: usize| {
        let lo = i.saturating_sub(anchor);
        let hi = (i + k - anchor).min(len);
        lo..hi
    };

    let mut rows = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            rows[[row, col]] = span(col, w).fold(identity, |acc, c| pick(acc, plane[[row, c]]));
        }
    }

    let mut result = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = span(row, h).fold(identity, |acc, r| pick(acc, rows[[r, col]]));
        }
    }

    result
}
