use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::frame::FrameSequence;

use super::image_io::save_png;

/// File name of the manifest written next to the frames.
pub const MANIFEST_FILE: &str = "sequence.json";

/// Playback description of a written frame sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceManifest {
    pub fps: u32,
    pub frame_count: usize,
    pub width: usize,
    pub height: usize,
    /// Frame file names relative to the manifest, in presentation order.
    pub frames: Vec<String>,
}

/// File name of frame `index` inside a sequence directory.
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:05}.png")
}

/// Write every frame as a numbered PNG into `dir`, followed by the manifest.
///
/// `progress` is called with `(frames_done, total_frames)`.
pub fn write_frame_sequence(
    frames: &FrameSequence,
    dir: &Path,
    mut progress: impl FnMut(usize, usize),
) -> Result<SequenceManifest> {
    fs::create_dir_all(dir)?;

    let total = frames.len();
    let mut names = Vec::with_capacity(total);
    for (i, frame) in frames.iter().enumerate() {
        let name = frame_file_name(i);
        save_png(frame, &dir.join(&name))?;
        names.push(name);
        progress(i + 1, total);
    }

    let (height, width) = frames.dims();
    let manifest = SequenceManifest {
        fps: frames.fps(),
        frame_count: total,
        width,
        height,
        frames: names,
    };

    let writer = BufWriter::new(File::create(manifest_path(dir))?);
    serde_json::to_writer_pretty(writer, &manifest)?;

    info!(
        frames = total,
        fps = manifest.fps,
        dir = %dir.display(),
        "Wrote frame sequence"
    );
    Ok(manifest)
}

/// Read back the manifest of a sequence directory.
pub fn read_manifest(dir: &Path) -> Result<SequenceManifest> {
    let file = File::open(manifest_path(dir))?;
    Ok(serde_json::from_reader(file)?)
}

pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}
