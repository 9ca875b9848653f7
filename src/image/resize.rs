//! Image resampling.
//!
//! Used to bring the comparand image onto the reference geometry before
//! differencing. Destination coordinates are mapped to the source with
//! half-pixel-center alignment and clamped at the borders, so resampling
//! never reads outside the source image.

use super::{Image, ImageDesc};

/// Interpolation method for image resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMethod {
    /// Nearest neighbor - fastest, blocky results
    Nearest,
    /// Bilinear interpolation - fast, reasonable quality
    #[default]
    Bilinear,
}

/// Resizes `src` to `width` x `height`, preserving the pixel format.
///
/// Returns a plain copy when the dimensions already match.
pub(super) fn resize(
    src: &Image,
    width: usize,
    height: usize,
    method: InterpolationMethod,
) -> Image {
    if src.width() == width && src.height() == height {
        return src.clone();
    }

    let desc = ImageDesc::new(width, height, src.format());
    let mut bytes = vec![0u8; desc.size_in_bytes()];

    let channels = desc.channel_count();
    let scale_x = src.width() as f32 / width as f32;
    let scale_y = src.height() as f32 / height as f32;

    for y in 0..height {
        // Half-pixel-center mapping keeps content aligned instead of shifting
        // it by half a destination pixel.
        let src_y = (y as f32 + 0.5) * scale_y - 0.5;
        for x in 0..width {
            let src_x = (x as f32 + 0.5) * scale_x - 0.5;
            let dst = &mut bytes[(y * width + x) * channels..][..channels];
            match method {
                InterpolationMethod::Nearest => sample_nearest(src, src_x, src_y, dst),
                InterpolationMethod::Bilinear => sample_bilinear(src, src_x, src_y, dst),
            }
        }
    }

    Image::new(desc, bytes)
}

#[inline]
fn clamp_coord(v: i64, size: usize) -> usize {
    v.clamp(0, size as i64 - 1) as usize
}

/// Nearest neighbor sampling with edge clamping.
#[inline]
fn sample_nearest(src: &Image, x: f32, y: f32, dst: &mut [u8]) {
    let ix = clamp_coord(x.round() as i64, src.width());
    let iy = clamp_coord(y.round() as i64, src.height());
    dst.copy_from_slice(src.pixel(ix, iy));
}

/// Bilinear sampling with edge clamping, one channel at a time.
#[inline]
fn sample_bilinear(src: &Image, x: f32, y: f32, dst: &mut [u8]) {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let x0i = clamp_coord(x0 as i64, src.width());
    let y0i = clamp_coord(y0 as i64, src.height());
    let x1i = clamp_coord(x0 as i64 + 1, src.width());
    let y1i = clamp_coord(y0 as i64 + 1, src.height());

    let p00 = src.pixel(x0i, y0i);
    let p10 = src.pixel(x1i, y0i);
    let p01 = src.pixel(x0i, y1i);
    let p11 = src.pixel(x1i, y1i);

    for c in 0..dst.len() {
        let top = p00[c] as f32 + fx * (p10[c] as f32 - p00[c] as f32);
        let bottom = p01[c] as f32 + fx * (p11[c] as f32 - p01[c] as f32);
        dst[c] = (top + fy * (bottom - top)).round().clamp(0.0, 255.0) as u8;
    }
}
