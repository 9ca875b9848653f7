//! Pixel-wise absolute difference of grayscale buffers.

use crate::common::Buffer2;

/// Compute the per-pixel absolute difference `|a - b|` of two grayscale
/// buffers of identical dimensions.
pub(super) fn absolute_difference(a: &Buffer2<u8>, b: &Buffer2<u8>) -> Buffer2<u8> {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "difference requires equal dimensions, got {}x{} vs {}x{}",
        a.width(),
        a.height(),
        b.width(),
        b.height()
    );

    let pixels = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&pa, &pb)| pa.abs_diff(pb))
        .collect();

    Buffer2::new(a.width(), a.height(), pixels)
}
