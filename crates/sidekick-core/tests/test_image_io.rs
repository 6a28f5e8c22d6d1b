mod common;

use std::sync::Arc;

use sidekick_core::animate::{animate, AnimationKind, AnimationRequest};
use sidekick_core::frame::FrameSequence;
use sidekick_core::io::frame_sink::{
    frame_file_name, manifest_path, read_manifest, write_frame_sequence, MANIFEST_FILE,
};
use sidekick_core::io::image_io::{load_image, save_image, save_png, save_tiff};

#[test]
fn test_png_round_trip_is_8bit_accurate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.png");
    let img = common::rgb_ramp(6, 9);

    save_png(&img, &path).unwrap();
    let back = load_image(&path).unwrap();

    assert_eq!(back.dims(), (6, 9));
    assert!(common::max_abs_diff(&img, &back) <= 1.0 / 255.0 + 1e-6);
}

#[test]
fn test_tiff_round_trip_is_16bit_accurate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.tiff");
    let img = common::rgb_ramp(5, 4);

    save_tiff(&img, &path).unwrap();
    let back = load_image(&path).unwrap();

    assert_eq!(back.dims(), (5, 4));
    assert!(common::max_abs_diff(&img, &back) <= 1.0 / 65535.0 + 1e-6);
}

#[test]
fn test_save_image_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let img = common::flat(3, 3, 0.5);

    let tif = dir.path().join("out.tif");
    save_image(&img, &tif).unwrap();
    assert_eq!(
        image::ImageFormat::from_path(&tif).unwrap(),
        image::ImageFormat::Tiff
    );
    assert!(load_image(&tif).is_ok());

    let png = dir.path().join("out.png");
    save_image(&img, &png).unwrap();
    assert!(load_image(&png).is_ok());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("nope.png")).is_err());
}

#[test]
fn test_frame_sequence_is_written_with_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("frames");
    let request = AnimationRequest {
        kind: AnimationKind::Fade,
        duration: 0.5,
        fps: 8,
        looped: true,
        ..AnimationRequest::default()
    };
    let frames = animate(&common::ramp(6, 4), &request).unwrap();
    // 4 frames forward, 2 interior frames reversed.
    assert_eq!(frames.len(), 6);

    let mut calls = Vec::new();
    let manifest =
        write_frame_sequence(&frames, &out, |done, total| calls.push((done, total))).unwrap();

    assert_eq!(manifest.frame_count, 6);
    assert_eq!(manifest.fps, 8);
    assert_eq!((manifest.width, manifest.height), (4, 6));
    assert_eq!(manifest.frames[0], "frame_00000.png");
    assert_eq!(calls.last(), Some(&(6, 6)));
    assert_eq!(calls.len(), 6);

    for name in &manifest.frames {
        let frame = load_image(&out.join(name)).unwrap();
        assert_eq!(frame.dims(), (6, 4));
    }
    assert!(manifest_path(&out).ends_with(MANIFEST_FILE));
    assert_eq!(read_manifest(&out).unwrap(), manifest);
}

#[test]
fn test_frames_are_written_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let frames = FrameSequence::new(
        vec![
            Arc::new(common::flat(2, 2, 0.0)),
            Arc::new(common::flat(2, 2, 1.0)),
        ],
        24,
    )
    .unwrap();

    write_frame_sequence(&frames, dir.path(), |_, _| {}).unwrap();

    let first = load_image(&dir.path().join(frame_file_name(0))).unwrap();
    let second = load_image(&dir.path().join(frame_file_name(1))).unwrap();
    assert_eq!(first.data[[0, 0, 0]], 0.0);
    assert_eq!(second.data[[0, 0, 0]], 1.0);
}

#[test]
fn test_reading_a_missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_manifest(dir.path()).is_err());
}
