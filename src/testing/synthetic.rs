//! Synthetic scene generation for change detection tests.
//!
//! Builds small deterministic image pairs: uniform canvases, painted
//! rectangles standing in for appeared objects, and bounded pixel noise
//! standing in for sensor grain.

use super::TestRng;
use crate::image::{Image, ImageDesc, PixelFormat};

/// Uniform grayscale canvas.
pub fn uniform(width: usize, height: usize, value: u8) -> Image {
    Image::new_filled(ImageDesc::new(width, height, PixelFormat::Gray8), value)
}

/// Uniform RGB canvas.
pub fn uniform_rgb(width: usize, height: usize, rgb: [u8; 3]) -> Image {
    let bytes = rgb
        .iter()
        .copied()
        .cycle()
        .take(width * height * 3)
        .collect();
    Image::new(ImageDesc::new(width, height, PixelFormat::Rgb8), bytes)
}

/// Paint a filled rectangle with the given pixel value.
///
/// `pixel` length must match the image's channel count and the rectangle
/// must lie inside the image.
pub fn paint_rect(image: &mut Image, x0: usize, y0: usize, w: usize, h: usize, pixel: &[u8]) {
    let channels = image.desc().channel_count();
    assert_eq!(
        pixel.len(),
        channels,
        "pixel length must match channel count"
    );
    assert!(
        x0 + w <= image.width() && y0 + h <= image.height(),
        "rectangle {}x{} at ({}, {}) does not fit in {}",
        w,
        h,
        x0,
        y0,
        image.desc()
    );

    let width = image.width();
    let bytes = image.bytes_mut();
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            let idx = (y * width + x) * channels;
            bytes[idx..idx + channels].copy_from_slice(pixel);
        }
    }
}

/// Add deterministic uniform noise to every channel.
///
/// Each byte is offset by a value in `[-amplitude, +amplitude]`, clamped to
/// the valid range. Same seed, same noise.
pub fn add_noise(image: &mut Image, amplitude: u8, seed: u64) {
    let mut rng = TestRng::new(seed);
    for byte in image.bytes_mut() {
        let offset = ((rng.next_f32() - 0.5) * 2.0 * amplitude as f32).round() as i16;
        *byte = (*byte as i16 + offset).clamp(0, 255) as u8;
    }
}
