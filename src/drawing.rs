//! Drawing primitives for annotating images.
//!
//! Works directly on packed u8 images (`Gray8` or `Rgb8`). Shapes are clipped
//! against the image bounds, so callers can draw rectangles that stick out
//! over the edge.

use glam::Vec2;

use crate::common::Color;
use crate::image::{Image, PixelFormat};

/// Draw a rectangle outline on an image.
///
/// The stroke is centered on the one-pixel rectangle border: thickness 3
/// covers one pixel outside the border, the border pixel itself, and one
/// pixel inside. Even thicknesses get the extra pixel on the inside.
///
/// # Arguments
/// * `image` - The image to draw on
/// * `top_left` - Top-left corner coordinates
/// * `size` - Width and height as Vec2; the opposite corner is `top_left + size`
/// * `color` - Color (for grayscale images, uses luminance)
/// * `thickness` - Stroke thickness in pixels, minimum 1
pub fn draw_rect(image: &mut Image, top_left: Vec2, size: Vec2, color: Color, thickness: f32) {
    let x1 = top_left.x.round() as i64;
    let y1 = top_left.y.round() as i64;
    let x2 = x1 + size.x.round() as i64;
    let y2 = y1 + size.y.round() as i64;

    let thickness = (thickness.round() as i64).max(1);
    let lo = -((thickness - 1) / 2);
    let hi = thickness / 2;

    // Horizontal bands reach across the corner blocks so corners stay closed.
    fill_block(image, (x1 + lo, x2 + hi), (y1 + lo, y1 + hi), color);
    fill_block(image, (x1 + lo, x2 + hi), (y2 + lo, y2 + hi), color);
    fill_block(image, (x1 + lo, x1 + hi), (y1 + lo, y2 + hi), color);
    fill_block(image, (x2 + lo, x2 + hi), (y1 + lo, y2 + hi), color);
}

/// Fill an axis-aligned block of pixels, clipped to the image bounds.
///
/// Both ranges are inclusive and may lie partially or fully outside the image.
fn fill_block(image: &mut Image, x_range: (i64, i64), y_range: (i64, i64), color: Color) {
    let x_min = x_range.0.max(0);
    let x_max = x_range.1.min(image.width() as i64 - 1);
    let y_min = y_range.0.max(0);
    let y_max = y_range.1.min(image.height() as i64 - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            put_pixel(image, x as usize, y as usize, color);
        }
    }
}

/// Write a single pixel, mapping the color onto the image's channel layout.
#[inline]
fn put_pixel(image: &mut Image, x: usize, y: usize, color: Color) {
    let width = image.width();
    match image.format() {
        PixelFormat::Gray8 => {
            image.bytes_mut()[y * width + x] = color.luminance_u8();
        }
        PixelFormat::Rgb8 => {
            let idx = (y * width + x) * 3;
            image.bytes_mut()[idx..idx + 3].copy_from_slice(&color.to_rgb_u8());
        }
    }
}
