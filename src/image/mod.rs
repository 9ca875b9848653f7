//! In-memory raster images and PNG/JPEG IO.
//!
//! Pixels are tightly packed u8 rows, either a single luminance channel
//! (`Gray8`) or interleaved RGB (`Rgb8`). Decoding normalizes every source
//! into one of these two layouts; the comparison pipeline itself only ever
//! sees this type plus the buffers derived from it.

mod io;
mod resize;

pub mod error;

use std::path::Path;

use crate::common::color::{LUMA_WEIGHT_B, LUMA_WEIGHT_G, LUMA_WEIGHT_R};
use crate::common::Buffer2;

pub use error::{ImageLoadError, ImageSaveError};
pub use resize::InterpolationMethod;

/// Supported image file extensions for reading and writing.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Pixel layout of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Single 8-bit luminance channel.
    Gray8,
    /// Interleaved 8-bit red, green, blue channels.
    Rgb8,
}

impl PixelFormat {
    /// Number of channels per pixel.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelFormat::Gray8 => write!(f, "Gray8"),
            PixelFormat::Rgb8 => write!(f, "Rgb8"),
        }
    }
}

/// Dimensions and pixel layout of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDesc {
    width: usize,
    height: usize,
    format: PixelFormat,
}

impl ImageDesc {
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        assert!(width > 0, "width must be positive, got {}", width);
        assert!(height > 0, "height must be positive, got {}", height);
        Self {
            width,
            height,
            format,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn channel_count(&self) -> usize {
        self.format.channel_count()
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Total byte length of a tightly packed pixel buffer.
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.pixel_count() * self.channel_count()
    }
}

impl std::fmt::Display for ImageDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.format)
    }
}

/// A decoded raster image with tightly packed u8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    desc: ImageDesc,
    bytes: Vec<u8>,
}

impl Image {
    /// Create an image from a descriptor and packed pixel bytes.
    ///
    /// The byte length must match the descriptor exactly.
    pub fn new(desc: ImageDesc, bytes: Vec<u8>) -> Self {
        assert_eq!(
            bytes.len(),
            desc.size_in_bytes(),
            "bytes length must equal width * height * channels"
        );
        Self { desc, bytes }
    }

    /// Create an image with every channel of every pixel set to `value`.
    pub fn new_filled(desc: ImageDesc, value: u8) -> Self {
        Self {
            desc,
            bytes: vec![value; desc.size_in_bytes()],
        }
    }

    #[inline]
    pub fn desc(&self) -> &ImageDesc {
        &self.desc
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.desc.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.desc.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.desc.format
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Channel values of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        debug_assert!(x < self.desc.width && y < self.desc.height);
        let channels = self.desc.channel_count();
        let idx = (y * self.desc.width + x) * channels;
        &self.bytes[idx..idx + channels]
    }

    /// Load an image from a PNG or JPEG file.
    ///
    /// The format is picked by file extension, as the sources the detector
    /// accepts are named uploads. Gray and gray+alpha files decode to
    /// `Gray8`; everything else decodes to `Rgb8` (alpha is dropped).
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Image, ImageLoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "png" | "jpeg" | "jpg" => io::load_png_jpeg(path),
            _ => Err(ImageLoadError::UnsupportedFormat { extension }),
        }
    }

    /// Decode an image from an in-memory byte buffer.
    ///
    /// The format is sniffed from the bytes and must be PNG or JPEG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Image, ImageLoadError> {
        io::decode_bytes(bytes)
    }

    /// Save the image as PNG or JPEG, picked by file extension.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageSaveError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|os_str| os_str.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "png" => io::save_png(self, path),
            "jpeg" | "jpg" => io::save_jpg(self, path),
            _ => Err(ImageSaveError::UnsupportedFormat { extension }),
        }
    }

    /// Encode the image to PNG bytes in memory.
    ///
    /// This is the download-facing form of the annotated output.
    pub fn encode_png(&self) -> Result<Vec<u8>, ImageSaveError> {
        io::encode_png(self)
    }

    /// Collapse to a single luminance channel on the 0-255 scale.
    ///
    /// Uses fixed Rec. 601 weights; a `Gray8` image is copied through
    /// unchanged.
    pub fn to_grayscale(&self) -> Buffer2<u8> {
        match self.desc.format {
            PixelFormat::Gray8 => {
                Buffer2::new(self.desc.width, self.desc.height, self.bytes.clone())
            }
            PixelFormat::Rgb8 => {
                let pixels = self
                    .bytes
                    .chunks_exact(3)
                    .map(|px| {
                        let luma = LUMA_WEIGHT_R * px[0] as f32
                            + LUMA_WEIGHT_G * px[1] as f32
                            + LUMA_WEIGHT_B * px[2] as f32;
                        luma.round() as u8
                    })
                    .collect();
                Buffer2::new(self.desc.width, self.desc.height, pixels)
            }
        }
    }

    /// Promote to `Rgb8`, replicating the luminance channel if needed.
    pub fn to_rgb8(&self) -> Image {
        match self.desc.format {
            PixelFormat::Rgb8 => self.clone(),
            PixelFormat::Gray8 => {
                let mut bytes = Vec::with_capacity(self.bytes.len() * 3);
                for &v in &self.bytes {
                    bytes.extend_from_slice(&[v, v, v]);
                }
                Image::new(
                    ImageDesc::new(self.desc.width, self.desc.height, PixelFormat::Rgb8),
                    bytes,
                )
            }
        }
    }

    /// Resample to the given dimensions.
    ///
    /// Returns a clone when the dimensions already match.
    pub fn resize_to(&self, width: usize, height: usize, method: InterpolationMethod) -> Image {
        resize::resize(self, width, height, method)
    }
}

#[cfg(test)]
mod tests;
