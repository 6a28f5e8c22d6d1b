use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb};
use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, SidekickError};
use crate::frame::ImageBuffer;

/// Convert a decoded image of any pixel format into a normalized RGB buffer.
pub fn from_dynamic(img: &DynamicImage) -> Result<ImageBuffer> {
    let rgb = img.to_rgb16();
    let (w, h) = rgb.dimensions();
    let mut data = Array3::<f32>::zeros((h as usize, w as usize, COLOR_CHANNEL_COUNT));

    for (col, row, pixel) in rgb.enumerate_pixels() {
        for ch in 0..COLOR_CHANNEL_COUNT {
            data[[row as usize, col as usize, ch]] = pixel.0[ch] as f32 / 65535.0;
        }
    }

    ImageBuffer::new(data)
}

/// Load an image file (any format the `image` crate decodes) as RGB.
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    let img = image::open(path)?;
    from_dynamic(&img)
}

/// Save as 8-bit RGB PNG.
pub fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let (h, w) = buffer.dims();

    let mut img = image::RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let px = [0, 1, 2].map(|ch| to_u8(buffer.data[[row, col, ch]]));
            img.put_pixel(col as u32, row as u32, Rgb(px));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save as 16-bit RGB TIFF.
pub fn save_tiff(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let (h, w) = buffer.dims();

    let pixels: Vec<u16> = buffer
        .data
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 65535.0) as u16)
        .collect();

    let img = image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| {
            SidekickError::InvalidRequest(format!("pixel buffer does not match {w}x{h}"))
        })?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save, choosing the format from the file extension (PNG by default).
pub fn save_image(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(buffer, path),
        _ => save_png(buffer, path),
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}
