/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Number of channels in an image buffer (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Fraction of the frame width/height a pan travels at full progress and
/// intensity 1.0.
pub const PAN_TRAVEL_FRACTION: f64 = 0.2;

/// Gain applied to the absolute difference so small deviations stay visible.
pub const DIFFERENCE_GAIN: f32 = 3.0;

/// Blend factor used for the overlay quadrant of the grid comparison.
pub const GRID_OVERLAY_OPACITY: f32 = 0.5;

/// Dark components smaller than this many pixels are treated as specks.
pub const MIN_ARTIFACT_AREA: usize = 50;

/// Re-threshold level applied after line smoothing.
pub const SMOOTH_RETHRESHOLD: u8 = 127;

/// Number of histogram bins for 8-bit equalization.
pub const HISTOGRAM_BINS: usize = 256;

/// Upper bound on `round(duration * fps)` for a single animation request.
pub const MAX_FRAME_COUNT: usize = 10_000;
