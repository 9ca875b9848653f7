//! Revelio - Image change detection library.
//!
//! This library compares pairs of images and reports where they differ:
//! - PNG/JPEG decoding from files or in-memory bytes
//! - Difference masking with a configurable luminance threshold
//! - Connected-region extraction with nesting and noise-area filters
//! - Bounding-box annotation drawn on a copy of the reference image
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use revelio::{ANNOTATED_FILENAME, ChangeDetector};
//!
//! // Compare two images
//! let detector = ChangeDetector::new();
//! let result = detector.detect_files("before.png", "after.png")?;
//!
//! println!("Found {} changed regions", result.regions.len());
//! result.annotated.save_file(ANNOTATED_FILENAME)?;
//! ```

pub(crate) mod change_detection;
pub(crate) mod common;
pub(crate) mod drawing;
pub(crate) mod image;
pub(crate) mod math;

pub mod testing;

// ============================================================================
// Core image types
// ============================================================================

pub use image::error::{ImageLoadError, ImageSaveError};
pub use image::{Image, ImageDesc, InterpolationMethod, PixelFormat, SUPPORTED_EXTENSIONS};

// ============================================================================
// Change detection
// ============================================================================

pub use change_detection::{
    // Output encoding
    ANNOTATED_FILENAME,
    ANNOTATED_MIME_TYPE,
    // Main API
    ChangeDetector,
    // Pipeline data structures
    ChangeRegion,
    // Configuration
    Config as ChangeDetectionConfig,
    Connectivity,
    // Results
    DetectionResult as ChangeDetectionResult,
    Diagnostics as ChangeDetectionDiagnostics,
};

// ============================================================================
// Geometry and color
// ============================================================================

pub use common::{BitBuffer2, Buffer2, Color};
pub use math::Aabb;
