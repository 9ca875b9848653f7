use super::*;
use crate::testing::test_output_path;

/// Builds an RGB image whose pixel at (x, y) is `f(x, y)`.
fn rgb_image(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Image {
    let desc = ImageDesc::new(width, height, PixelFormat::Rgb8);
    let mut bytes = Vec::with_capacity(desc.size_in_bytes());
    for y in 0..height {
        for x in 0..width {
            bytes.extend_from_slice(&f(x, y));
        }
    }
    Image::new(desc, bytes)
}

fn gray_image(width: usize, height: usize, pixels: Vec<u8>) -> Image {
    Image::new(ImageDesc::new(width, height, PixelFormat::Gray8), pixels)
}

#[test]
fn test_desc_accessors() {
    let desc = ImageDesc::new(4, 3, PixelFormat::Rgb8);
    assert_eq!(desc.width(), 4);
    assert_eq!(desc.height(), 3);
    assert_eq!(desc.channel_count(), 3);
    assert_eq!(desc.pixel_count(), 12);
    assert_eq!(desc.size_in_bytes(), 36);
    assert_eq!(desc.to_string(), "4x3 Rgb8");

    let desc = ImageDesc::new(2, 2, PixelFormat::Gray8);
    assert_eq!(desc.channel_count(), 1);
    assert_eq!(desc.size_in_bytes(), 4);
    assert_eq!(desc.to_string(), "2x2 Gray8");
}

#[test]
#[should_panic(expected = "width must be positive")]
fn test_desc_rejects_zero_width() {
    let _ = ImageDesc::new(0, 4, PixelFormat::Gray8);
}

#[test]
#[should_panic(expected = "bytes length must equal")]
fn test_new_rejects_wrong_byte_length() {
    let _ = Image::new(ImageDesc::new(2, 2, PixelFormat::Rgb8), vec![0; 5]);
}

#[test]
fn test_pixel_accessor() {
    let image = rgb_image(3, 2, |x, y| [x as u8, y as u8, 9]);
    assert_eq!(image.pixel(0, 0), &[0, 0, 9]);
    assert_eq!(image.pixel(2, 0), &[2, 0, 9]);
    assert_eq!(image.pixel(1, 1), &[1, 1, 9]);
}

#[test]
fn test_grayscale_weights() {
    let image = rgb_image(5, 1, |x, _| match x {
        0 => [255, 0, 0],
        1 => [0, 255, 0],
        2 => [0, 0, 255],
        3 => [255, 255, 255],
        _ => [0, 0, 0],
    });

    let gray = image.to_grayscale();
    assert_eq!(gray.pixels(), &[76, 150, 29, 255, 0]);
}

#[test]
fn test_grayscale_gray8_passthrough() {
    let image = gray_image(2, 2, vec![1, 2, 3, 4]);
    let gray = image.to_grayscale();
    assert_eq!(gray.width(), 2);
    assert_eq!(gray.height(), 2);
    assert_eq!(gray.pixels(), &[1, 2, 3, 4]);
}

#[test]
fn test_grayscale_matches_for_luminance_equal_colors() {
    // (0, 170, 2) carries the same luminance as mid gray, so the two pixels
    // must collapse to the same value and become indistinguishable.
    let a = rgb_image(1, 1, |_, _| [100, 100, 100]);
    let b = rgb_image(1, 1, |_, _| [0, 170, 2]);
    assert_eq!(a.to_grayscale().pixels(), b.to_grayscale().pixels());
    assert_eq!(a.to_grayscale().pixels(), &[100]);
}

#[test]
fn test_to_rgb8_replicates_luminance() {
    let image = gray_image(2, 1, vec![7, 200]);
    let rgb = image.to_rgb8();
    assert_eq!(rgb.format(), PixelFormat::Rgb8);
    assert_eq!(rgb.bytes(), &[7, 7, 7, 200, 200, 200]);
}

#[test]
fn test_to_rgb8_noop_for_rgb() {
    let image = rgb_image(2, 2, |x, y| [x as u8, y as u8, 42]);
    let rgb = image.to_rgb8();
    assert_eq!(rgb, image);
}

#[test]
fn test_resize_same_size_is_copy() {
    let image = rgb_image(4, 3, |x, y| [x as u8 * 10, y as u8 * 10, 5]);
    let resized = image.resize_to(4, 3, InterpolationMethod::Bilinear);
    assert_eq!(resized, image);
}

#[test]
fn test_resize_uniform_image_stays_uniform() {
    let image = Image::new_filled(ImageDesc::new(8, 6, PixelFormat::Rgb8), 77);
    for method in [InterpolationMethod::Nearest, InterpolationMethod::Bilinear] {
        let resized = image.resize_to(3, 5, method);
        assert_eq!(resized.width(), 3);
        assert_eq!(resized.height(), 5);
        assert!(
            resized.bytes().iter().all(|&b| b == 77),
            "uniform image must stay uniform under {:?}",
            method
        );
    }
}

#[test]
fn test_resize_bilinear_downscale_averages() {
    // Collapsing a 2x2 block to one pixel samples its center, which is the
    // plain average of the four values.
    let image = gray_image(2, 2, vec![10, 30, 50, 70]);
    let resized = image.resize_to(1, 1, InterpolationMethod::Bilinear);
    assert_eq!(resized.bytes(), &[40]);
}

#[test]
fn test_resize_nearest_upscale() {
    let image = gray_image(2, 1, vec![0, 255]);
    let resized = image.resize_to(4, 1, InterpolationMethod::Nearest);
    assert_eq!(resized.bytes(), &[0, 0, 255, 255]);
}

#[test]
fn test_resize_preserves_format() {
    let gray = gray_image(4, 4, vec![128; 16]);
    assert_eq!(
        gray.resize_to(2, 2, InterpolationMethod::Bilinear).format(),
        PixelFormat::Gray8
    );

    let rgb = rgb_image(4, 4, |_, _| [1, 2, 3]);
    assert_eq!(
        rgb.resize_to(8, 8, InterpolationMethod::Bilinear).format(),
        PixelFormat::Rgb8
    );
}

#[test]
fn test_read_file_rejects_unknown_extension() {
    let err = Image::read_file("animation.gif").unwrap_err();
    match err {
        ImageLoadError::UnsupportedFormat { extension } => assert_eq!(extension, "gif"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_read_file_missing_file_is_io_error() {
    let err = Image::read_file("definitely/missing/input.png").unwrap_err();
    assert!(
        matches!(err, ImageLoadError::Io { .. }),
        "expected Io, got {:?}",
        err
    );
}

#[test]
fn test_save_file_rejects_unknown_extension() {
    let image = gray_image(1, 1, vec![0]);
    let err = image.save_file("out.bmp").unwrap_err();
    match err {
        ImageSaveError::UnsupportedFormat { extension } => assert_eq!(extension, "bmp"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_from_bytes_rejects_garbage() {
    assert!(matches!(
        Image::from_bytes(&[0x00, 0x01, 0x02, 0x03]).unwrap_err(),
        ImageLoadError::DecodeBytes(_)
    ));
    assert!(matches!(
        Image::from_bytes(&[]).unwrap_err(),
        ImageLoadError::DecodeBytes(_)
    ));
}

#[test]
fn test_from_bytes_rejects_unsupported_container() {
    // A valid GIF header is recognized but refused: only PNG and JPEG are in.
    let err = Image::from_bytes(b"GIF89a\x01\x00\x01\x00").unwrap_err();
    match err {
        ImageLoadError::UnsupportedFormat { extension } => assert_eq!(extension, "gif"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_encode_png_roundtrip_rgb() {
    let image = rgb_image(7, 5, |x, y| [x as u8 * 30, y as u8 * 40, (x + y) as u8]);
    let png = image.encode_png().unwrap();
    let decoded = Image::from_bytes(&png).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn test_encode_png_roundtrip_gray() {
    let image = gray_image(3, 3, vec![0, 32, 64, 96, 128, 160, 192, 224, 255]);
    let png = image.encode_png().unwrap();
    let decoded = Image::from_bytes(&png).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn test_save_and_read_roundtrip() {
    let image = rgb_image(6, 4, |x, y| [x as u8 * 20, 255 - y as u8 * 50, 13]);
    let path = test_output_path("image_roundtrip.png");
    image.save_file(&path).unwrap();

    let loaded = Image::read_file(&path).unwrap();
    assert_eq!(loaded, image);
}
