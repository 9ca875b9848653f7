//! Detected change region type.

use crate::math::Aabb;

/// A connected region of changed pixels.
///
/// Produced after thresholding, connected component labeling, and noise
/// filtering. Each region is reported by its minimal enclosing axis-aligned
/// rectangle and its pixel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRegion {
    /// Tight bounding box around the region's pixels (inclusive bounds).
    pub bbox: Aabb,
    /// Number of changed pixels in the region.
    ///
    /// This is the pixel count, not the bounding box area; a thin diagonal
    /// streak has a large box but a small area.
    pub area: usize,
}

impl ChangeRegion {
    /// Left edge of the bounding box.
    #[inline]
    pub const fn x(&self) -> usize {
        self.bbox.x_min
    }

    /// Top edge of the bounding box.
    #[inline]
    pub const fn y(&self) -> usize {
        self.bbox.y_min
    }

    /// Bounding box width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.bbox.width()
    }

    /// Bounding box height in pixels.
    #[inline]
    pub const fn height(&self) -> usize {
        self.bbox.height()
    }
}
