mod common;

use approx::assert_abs_diff_eq;
use ndarray::{s, Array3};
use sidekick_core::error::SidekickError;
use sidekick_core::transform::{
    concat_height, concat_width, crop, fit_within, resize_bilinear, sample_zero_fill, translate,
};

fn row(values: &[f32]) -> Array3<f32> {
    Array3::from_shape_fn((1, values.len(), 3), |(_, c, _)| values[c])
}

#[test]
fn test_same_size_resize_is_identity() {
    let img = common::rgb_ramp(5, 7);
    let out = resize_bilinear(&img.data, 5, 7);
    assert_eq!(out, img.data);
}

#[test]
fn test_upsample_uses_half_pixel_centers() {
    let out = resize_bilinear(&row(&[0.0, 1.0]), 1, 4);
    let expected = [0.0, 0.25, 0.75, 1.0];
    for (col, &e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(out[[0, col, 0]], e, epsilon = 1e-6);
    }
}

#[test]
fn test_downsample_by_two_averages_pairs() {
    let out = resize_bilinear(&row(&[0.0, 0.2, 0.4, 0.6]), 1, 2);
    assert_abs_diff_eq!(out[[0, 0, 1]], 0.1, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 1, 1]], 0.5, epsilon = 1e-6);
}

#[test]
fn test_resize_large_output_matches_shape() {
    // Large enough to take the parallel path.
    let img = common::ramp(16, 16);
    let out = resize_bilinear(&img.data, 300, 260);
    assert_eq!(out.dim(), (300, 260, 3));
    assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_fit_within_keeps_aspect_ratio() {
    let img = common::flat(100, 50, 0.5);
    let out = fit_within(&img.data, 20);
    assert_eq!(out.dim(), (20, 10, 3));

    let small = common::flat(10, 8, 0.5);
    assert_eq!(fit_within(&small.data, 20), small.data);
}

#[test]
fn test_fit_within_never_collapses_an_axis() {
    let img = common::flat(1, 400, 0.5);
    let out = fit_within(&img.data, 100);
    assert_eq!(out.dim(), (1, 100, 3));
}

#[test]
fn test_translate_moves_content() {
    let img = common::ramp(3, 3);
    let out = translate(&img.data, 1, 1);

    assert_eq!(out[[1, 1, 0]], img.data[[0, 0, 0]]);
    assert_eq!(out[[2, 2, 0]], img.data[[1, 1, 0]]);
    assert!(out.slice(s![0, .., ..]).iter().all(|&v| v == 0.0));
}

#[test]
fn test_translate_negative_and_out_of_range() {
    let img = common::ramp(3, 4);
    let out = translate(&img.data, 0, -2);
    assert_eq!(out[[1, 0, 2]], img.data[[1, 2, 2]]);
    assert_eq!(out[[1, 3, 2]], 0.0);

    let gone = translate(&img.data, 5, 0);
    assert!(gone.iter().all(|&v| v == 0.0));
}

#[test]
fn test_crop_region() {
    let img = common::rgb_ramp(4, 5);
    let out = crop(&img.data, 1, 2, 2, 3);
    assert_eq!(out.dim(), (2, 3, 3));
    assert_eq!(out[[0, 0, 1]], img.data[[1, 2, 1]]);
    assert_eq!(out[[1, 2, 2]], img.data[[2, 4, 2]]);
}

#[test]
fn test_concat_shapes() {
    let a = common::flat(2, 3, 0.0);
    let b = common::flat(2, 4, 1.0);
    assert_eq!(concat_width(&a.data, &b.data).unwrap().dim(), (2, 7, 3));

    let c = common::flat(5, 3, 1.0);
    assert_eq!(concat_height(&a.data, &c.data).unwrap().dim(), (7, 3, 3));
}

#[test]
fn test_concat_mismatch_is_rejected() {
    let a = common::flat(2, 3, 0.0);
    let b = common::flat(4, 3, 1.0);
    let err = concat_width(&a.data, &b.data).unwrap_err();
    assert!(matches!(err, SidekickError::InvalidRequest(_)));
}

#[test]
fn test_zero_fill_sampling() {
    let img = common::flat(3, 3, 1.0);

    assert_eq!(sample_zero_fill(&img.data, 1.0, 1.0), [1.0; 3]);
    assert_eq!(sample_zero_fill(&img.data, -1.0, -1.0), [0.0; 3]);
    // Halfway past the top edge: half the weight falls outside.
    let px = sample_zero_fill(&img.data, -0.5, 1.0);
    assert_abs_diff_eq!(px[0], 0.5, epsilon = 1e-6);
}
