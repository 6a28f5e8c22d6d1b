use ndarray::Array3;

/// Mean squared per-value difference, accumulated in f64.
pub fn mean_squared_error(a: &Array3<f32>, b: &Array3<f32>) -> f64 {
    let n = a.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as f64 - y as f64).powi(2))
        .sum();
    sum / n
}

/// `1 / (1 + MSE)`: 1.0 only for identical inputs, approaching 0 as they diverge.
pub fn similarity_score(a: &Array3<f32>, b: &Array3<f32>) -> f64 {
    1.0 / (1.0 + mean_squared_error(a, b))
}

/// Population variance over every value of the array.
pub fn population_variance(data: &Array3<f32>) -> f64 {
    let n = data.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    data.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n
}

/// Ratio of the smaller to the larger variance, in [0, 1].
///
/// Two flat images (both variances zero) score 1.0.
pub fn quality_score(a: &Array3<f32>, b: &Array3<f32>) -> f64 {
    let var_a = population_variance(a);
    let var_b = population_variance(b);
    let hi = var_a.max(var_b);
    if hi == 0.0 {
        return 1.0;
    }
    var_a.min(var_b) / hi
}
