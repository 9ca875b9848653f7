use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an image into a pixel buffer.
///
/// Either input failing with one of these aborts a comparison; callers can
/// rely on "no annotated image is produced" as opposed to a successful
/// result with zero regions.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image_lib::ImageError,
    },

    #[error("Failed to decode image from memory: {0}")]
    DecodeBytes(image_lib::ImageError),

    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported image format: '{extension}'")]
    UnsupportedFormat { extension: String },
}

/// Errors that can occur when encoding or writing an image.
#[derive(Debug, Error)]
pub enum ImageSaveError {
    #[error("Failed to encode image: {0}")]
    Encode(image_lib::ImageError),

    #[error("Failed to write file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported image format: '{extension}'")]
    UnsupportedFormat { extension: String },
}
