//! Change detection between two images.
//!
//! Compares a reference image against a comparand and reports the regions
//! where they differ, drawing a bounding box around each one on a copy of
//! the reference.
//!
//! # Algorithm Overview
//!
//! 1. **Resampling**: Resize the comparand to the reference dimensions. The
//!    reference geometry always wins; the output image keeps its size.
//!
//! 2. **Grayscale**: Collapse both images to single-channel luminance using
//!    fixed Rec. 601 weights.
//!
//! 3. **Differencing**: Compute the per-pixel absolute difference and keep
//!    pixels at or above the difference threshold as a binary change mask.
//!
//! 4. **Region extraction**: Group changed pixels into connected components
//!    and keep the outermost ones (components nested inside another change
//!    region are dropped).
//!
//! 5. **Noise filtering**: Discard regions whose pixel area does not exceed
//!    the noise area cutoff.
//!
//! 6. **Annotation**: Draw the bounding box of each surviving region onto
//!    a copy of the reference image.

mod annotate;
mod config;
mod diff;
mod labeling;
mod region;
mod regions;
mod threshold;


use std::path::Path;

use crate::image::{Image, ImageLoadError};

use labeling::LabelMap;

pub use config::{Config, Connectivity};
pub use region::ChangeRegion;

/// Suggested filename for the annotated output image.
pub const ANNOTATED_FILENAME: &str = "detected_objects.png";

/// MIME type of the encoded annotated output.
pub const ANNOTATED_MIME_TYPE: &str = "image/png";

// =============================================================================
// Results
// =============================================================================

/// Result of change detection with diagnostics.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Copy of the reference image with a box drawn around every region.
    pub annotated: Image,
    /// Surviving regions, ordered by the raster position of their first pixel.
    pub regions: Vec<ChangeRegion>,
    /// Diagnostic counters from the detection pipeline.
    pub diagnostics: Diagnostics,
}

/// Diagnostic information from change detection.
///
/// Stage-by-stage counters for debugging and threshold tuning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    /// Number of pixels at or above the difference threshold.
    pub changed_pixels: usize,
    /// Number of connected components in the change mask.
    pub components_found: usize,
    /// Number of components dropped for being nested inside another one.
    pub components_nested: usize,
    /// Number of components dropped by the noise area filter.
    pub components_below_area: usize,
    /// Final number of reported regions.
    pub regions_kept: usize,
}

// =============================================================================
// ChangeDetector
// =============================================================================

/// Change detector comparing image pairs under a fixed configuration.
///
/// Wraps a [`Config`] and provides methods for detecting changes between
/// decoded images, files, or raw encoded bytes.
///
/// # Example
///
/// ```rust,ignore
/// use revelio::{ChangeDetector, Image};
///
/// // Simple usage with defaults
/// let detector = ChangeDetector::new();
/// let result = detector.detect_files("before.png", "after.png")?;
/// println!("{} changed regions", result.regions.len());
/// result.annotated.save_file("detected_objects.png")?;
///
/// // With custom configuration
/// let config = Config {
///     diff_threshold: 45,
///     max_noise_area: 1000,
///     ..Config::default()
/// };
/// let detector = ChangeDetector::from_config(config);
/// ```
#[derive(Debug, Default)]
pub struct ChangeDetector {
    config: Config,
}

impl ChangeDetector {
    /// Create a new change detector with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a change detector from an existing configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Get reference to the underlying configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Detect changed regions between two decoded images.
    ///
    /// The comparand is resampled to the reference dimensions first, so the
    /// two images may differ in size. The reference is not mutated; the
    /// annotated copy always has the reference's dimensions.
    pub fn detect(&self, reference: &Image, comparand: &Image) -> DetectionResult {
        self.config.validate();

        // Step 1: Bring the comparand onto the reference geometry.
        let resized;
        let comparand = if comparand.width() == reference.width()
            && comparand.height() == reference.height()
        {
            comparand
        } else {
            resized = comparand.resize_to(
                reference.width(),
                reference.height(),
                self.config.interpolation,
            );
            &resized
        };

        // Step 2: Grayscale both sides.
        let gray_reference = reference.to_grayscale();
        let gray_comparand = comparand.to_grayscale();

        // Step 3: Difference and binary change mask.
        let diff = diff::absolute_difference(&gray_reference, &gray_comparand);
        let mask = threshold::threshold_mask(&diff, self.config.diff_threshold);

        let mut diagnostics = Diagnostics {
            changed_pixels: mask.count_ones(),
            ..Default::default()
        };
        tracing::debug!(
            "{} of {} pixels above threshold {}",
            diagnostics.changed_pixels,
            mask.len(),
            self.config.diff_threshold
        );

        // Step 4: Group changed pixels into connected components.
        let labels = LabelMap::from_mask(&mask, self.config.connectivity);
        diagnostics.components_found = labels.num_labels();

        // Step 5: Keep outermost components above the noise area.
        let all_regions = regions::extract_regions(&labels);
        let external = regions::external_flags(&labels, &mask, self.config.connectivity);

        let mut kept = Vec::new();
        for (region, is_external) in all_regions.into_iter().zip(external) {
            if !is_external {
                diagnostics.components_nested += 1;
            } else if region.area <= self.config.max_noise_area {
                diagnostics.components_below_area += 1;
            } else {
                kept.push(region);
            }
        }
        diagnostics.regions_kept = kept.len();
        tracing::debug!(
            "{} of {} components kept ({} nested, {} below noise area)",
            kept.len(),
            diagnostics.components_found,
            diagnostics.components_nested,
            diagnostics.components_below_area
        );

        // Step 6: Draw the surviving boxes onto a copy of the reference.
        let annotated = annotate::annotate(reference, &kept, &self.config);

        DetectionResult {
            annotated,
            regions: kept,
            diagnostics,
        }
    }

    /// Detect changed regions between two image files.
    ///
    /// Fails with [`ImageLoadError`] if either file cannot be decoded; no
    /// annotated image is produced in that case.
    pub fn detect_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        reference: P,
        comparand: Q,
    ) -> Result<DetectionResult, ImageLoadError> {
        let reference = Image::read_file(reference)?;
        let comparand = Image::read_file(comparand)?;
        Ok(self.detect(&reference, &comparand))
    }

    /// Detect changed regions between two encoded byte buffers (PNG or JPEG).
    ///
    /// Fails with [`ImageLoadError`] if either buffer cannot be decoded; no
    /// annotated image is produced in that case.
    pub fn detect_bytes(
        &self,
        reference: &[u8],
        comparand: &[u8],
    ) -> Result<DetectionResult, ImageLoadError> {
        let reference = Image::from_bytes(reference)?;
        let comparand = Image::from_bytes(comparand)?;
        Ok(self.detect(&reference, &comparand))
    }
}
