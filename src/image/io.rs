use std::io::Cursor;
use std::path::Path;

use super::error::{ImageLoadError, ImageSaveError};
use super::{Image, ImageDesc, PixelFormat};

pub(crate) fn load_png_jpeg(path: &Path) -> Result<Image, ImageLoadError> {
    let img = image_lib::open(path).map_err(|err| match err {
        image_lib::ImageError::IoError(source) => ImageLoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => ImageLoadError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(normalize(img))
}

pub(crate) fn decode_bytes(bytes: &[u8]) -> Result<Image, ImageLoadError> {
    let format = image_lib::guess_format(bytes).map_err(ImageLoadError::DecodeBytes)?;

    match format {
        image_lib::ImageFormat::Png | image_lib::ImageFormat::Jpeg => {}
        other => {
            let extension = other.extensions_str().first().copied().unwrap_or("unknown");
            return Err(ImageLoadError::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }
    }

    let img = image_lib::load_from_memory_with_format(bytes, format)
        .map_err(ImageLoadError::DecodeBytes)?;

    Ok(normalize(img))
}

/// Normalize any decoded color type into the two layouts the pipeline
/// works with: gray sources stay single-channel, everything else becomes
/// interleaved RGB with alpha dropped.
fn normalize(img: image_lib::DynamicImage) -> Image {
    let width = img.width() as usize;
    let height = img.height() as usize;

    match img.color() {
        image_lib::ColorType::L8
        | image_lib::ColorType::L16
        | image_lib::ColorType::La8
        | image_lib::ColorType::La16 => {
            let gray = img.into_luma8();
            Image::new(
                ImageDesc::new(width, height, PixelFormat::Gray8),
                gray.into_raw(),
            )
        }
        _ => {
            let rgb = img.into_rgb8();
            Image::new(
                ImageDesc::new(width, height, PixelFormat::Rgb8),
                rgb.into_raw(),
            )
        }
    }
}

fn color_type(format: PixelFormat) -> image_lib::ColorType {
    match format {
        PixelFormat::Gray8 => image_lib::ColorType::L8,
        PixelFormat::Rgb8 => image_lib::ColorType::Rgb8,
    }
}

fn save_with_format(
    image: &Image,
    path: &Path,
    format: image_lib::ImageFormat,
) -> Result<(), ImageSaveError> {
    image_lib::save_buffer_with_format(
        path,
        image.bytes(),
        image.width() as u32,
        image.height() as u32,
        color_type(image.format()),
        format,
    )
    .map_err(|err| match err {
        image_lib::ImageError::IoError(source) => ImageSaveError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => ImageSaveError::Encode(source),
    })
}

pub(crate) fn save_png(image: &Image, path: &Path) -> Result<(), ImageSaveError> {
    save_with_format(image, path, image_lib::ImageFormat::Png)
}

pub(crate) fn save_jpg(image: &Image, path: &Path) -> Result<(), ImageSaveError> {
    save_with_format(image, path, image_lib::ImageFormat::Jpeg)
}

pub(crate) fn encode_png(image: &Image) -> Result<Vec<u8>, ImageSaveError> {
    let mut bytes = Vec::new();

    image_lib::write_buffer_with_format(
        &mut Cursor::new(&mut bytes),
        image.bytes(),
        image.width() as u32,
        image.height() as u32,
        color_type(image.format()),
        image_lib::ImageFormat::Png,
    )
    .map_err(ImageSaveError::Encode)?;

    Ok(bytes)
}
