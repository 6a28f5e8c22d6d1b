use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::PAN_TRAVEL_FRACTION;
use crate::error::SidekickError;
use crate::frame::ImageBuffer;
use crate::transform::{crop, resize_bilinear, rotate, translate};

/// Motion profile applied across an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    #[default]
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    Rotate,
    Fade,
    Pulse,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 9] = [
        AnimationKind::ZoomIn,
        AnimationKind::ZoomOut,
        AnimationKind::PanLeft,
        AnimationKind::PanRight,
        AnimationKind::PanUp,
        AnimationKind::PanDown,
        AnimationKind::Rotate,
        AnimationKind::Fade,
        AnimationKind::Pulse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::PanLeft => "pan_left",
            Self::PanRight => "pan_right",
            Self::PanUp => "pan_up",
            Self::PanDown => "pan_down",
            Self::Rotate => "rotate",
            Self::Fade => "fade",
            Self::Pulse => "pulse",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationKind {
    type Err = SidekickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| SidekickError::InvalidRequest(format!("unknown animation type '{s}'")))
    }
}

/// Render one frame of `kind` at eased progress `eased`.
pub fn render_frame(
    image: &ImageBuffer,
    kind: AnimationKind,
    eased: f64,
    intensity: f64,
) -> ImageBuffer {
    let travel = eased * intensity * PAN_TRAVEL_FRACTION;
    match kind {
        AnimationKind::ZoomIn => zoom(image, 1.0 + eased * intensity),
        AnimationKind::ZoomOut => zoom(image, 1.0 + intensity - eased * intensity),
        AnimationKind::PanLeft => pan(image, -travel, 0.0),
        AnimationKind::PanRight => pan(image, travel, 0.0),
        AnimationKind::PanUp => pan(image, 0.0, -travel),
        AnimationKind::PanDown => pan(image, 0.0, travel),
        AnimationKind::Rotate => ImageBuffer {
            data: rotate(&image.data, eased * intensity * 360.0),
        },
        AnimationKind::Fade => scale_values(image, 1.0 - eased * intensity),
        AnimationKind::Pulse => {
            scale_values(image, 0.5 + 0.5 * (eased * PI * 4.0 * intensity).sin())
        }
    }
}

/// Crop the centered `1/scale` region and resample it back to full size.
pub fn zoom(image: &ImageBuffer, scale: f64) -> ImageBuffer {
    if scale == 1.0 {
        return image.clone();
    }

    let (h, w) = image.dims();
    // Never collapse to an empty crop, never exceed the source.
    let crop_h = ((h as f64 / scale) as usize).clamp(1, h);
    let crop_w = ((w as f64 / scale) as usize).clamp(1, w);
    let top = (h - crop_h) / 2;
    let left = (w - crop_w) / 2;

    let region = crop(&image.data, top, left, crop_h, crop_w);
    ImageBuffer {
        data: resize_bilinear(&region, h, w),
    }
}

/// Translate by fractions of the frame size. Positive `dx` moves content
/// right, positive `dy` moves it down.
pub fn pan(image: &ImageBuffer, dx: f64, dy: f64) -> ImageBuffer {
    if dx == 0.0 && dy == 0.0 {
        return image.clone();
    }

    let (h, w) = image.dims();
    let offset_x = (dx * w as f64) as i64;
    let offset_y = (dy * h as f64) as i64;
    ImageBuffer {
        data: translate(&image.data, offset_y, offset_x),
    }
}

/// Multiply every value by `factor`, keeping the result in [0, 1].
/// A factor of exactly 1 leaves the source untouched.
pub fn scale_values(image: &ImageBuffer, factor: f64) -> ImageBuffer {
    if factor == 1.0 {
        return image.clone();
    }
    let factor = factor as f32;
    image.map_clamped(|v| v * factor)
}
