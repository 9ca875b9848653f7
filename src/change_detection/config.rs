//! Configuration types for change detection.
//!
//! This module defines the flat [`Config`] struct used by the change
//! detection pipeline. Every tuning constant of the pipeline lives here so
//! callers can inspect and override it in one place.

use crate::common::Color;
use crate::image::InterpolationMethod;

// ============================================================================
// Enums
// ============================================================================

/// Pixel connectivity for connected component labeling.
///
/// Determines which pixels are considered neighbors when grouping changed
/// pixels into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-connectivity: only horizontal and vertical neighbors.
    /// Pixels at (x±1, y) and (x, y±1) are connected.
    Four,
    /// 8-connectivity: includes diagonal neighbors. This is the default;
    /// diagonally touching fragments of one moving object stay one region.
    #[default]
    Eight,
}

// ============================================================================
// Config
// ============================================================================

/// Configuration for the change detection pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    // -- Differencing --
    /// Minimum grayscale difference (0-255) for a pixel to count as changed.
    /// Pixels at or above this value enter the change mask.
    pub diff_threshold: u8,
    /// Interpolation used to resample the comparand onto the reference
    /// geometry when the two images differ in size.
    pub interpolation: InterpolationMethod,

    // -- Region extraction --
    /// Pixel connectivity for grouping changed pixels into regions.
    pub connectivity: Connectivity,
    /// Largest pixel area still considered noise. Regions must be strictly
    /// larger than this to be reported.
    pub max_noise_area: usize,

    // -- Annotation --
    /// Outline color for detected regions.
    pub box_color: Color,
    /// Outline stroke thickness in pixels.
    pub box_stroke: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Differencing
            diff_threshold: 30,
            interpolation: InterpolationMethod::Bilinear,

            // Region extraction
            connectivity: Connectivity::Eight,
            max_noise_area: 500,

            // Annotation
            box_color: Color::GREEN,
            box_stroke: 3.0,
        }
    }
}

impl Config {
    /// Validate the configuration, panicking if invalid.
    pub fn validate(&self) {
        assert!(
            self.diff_threshold >= 1,
            "diff_threshold must be at least 1, got {}",
            self.diff_threshold
        );
        assert!(
            self.box_stroke.is_finite() && self.box_stroke >= 1.0,
            "box_stroke must be at least 1.0, got {}",
            self.box_stroke
        );
    }

    // =========================================================================
    // Preset Constructors
    // =========================================================================

    /// Sensitive settings for low-contrast scenes.
    ///
    /// Halves the difference threshold and keeps much smaller regions, at the
    /// cost of more false positives from sensor noise and lighting drift.
    pub fn sensitive() -> Self {
        Self {
            diff_threshold: 15,
            max_noise_area: 100,
            ..Self::default()
        }
    }

    /// Conservative settings for noisy sources such as night-mode cameras.
    ///
    /// Raises the difference threshold and the noise floor so only large,
    /// strongly changed regions survive.
    pub fn conservative() -> Self {
        Self {
            diff_threshold: 50,
            max_noise_area: 2000,
            ..Self::default()
        }
    }
}
