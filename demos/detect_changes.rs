//! Example: Detect changed regions between two images
//!
//! This example compares a reference image against a comparand, draws a green
//! box around every changed region, and saves the annotated copy. Run it with
//! two image paths, or with no arguments to compare a generated scene pair.
//!
//! Output:
//! ```text
//! test_output/
//!   synthetic_before.png   (no-argument run only)
//!   synthetic_after.png    (no-argument run only)
//!   detected_objects.png
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Compare two image files
//! cargo run --example detect_changes -- before.png after.png
//!
//! # Or run on a generated scene
//! cargo run --example detect_changes
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use revelio::testing::synthetic::{paint_rect, uniform_rgb};
use revelio::{ANNOTATED_FILENAME, ChangeDetector, Image};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing for console output
    init_tracing();

    let output_dir = PathBuf::from("test_output");
    std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

    let args: Vec<String> = env::args().collect();
    let (reference, comparand) = match args.len() {
        1 => {
            let (reference, comparand) = synthesize_pair();
            reference
                .save_file(output_dir.join("synthetic_before.png"))
                .expect("Failed to save synthetic reference");
            comparand
                .save_file(output_dir.join("synthetic_after.png"))
                .expect("Failed to save synthetic comparand");
            tracing::info!(
                width = reference.width(),
                height = reference.height(),
                "Comparing generated scene pair"
            );
            (reference, comparand)
        }
        3 => {
            tracing::info!(reference = %args[1], comparand = %args[2], "Comparing images");
            (
                Image::read_file(&args[1]).expect("Failed to load reference image"),
                Image::read_file(&args[2]).expect("Failed to load comparand image"),
            )
        }
        _ => {
            eprintln!("Usage: {} [<reference> <comparand>]", args[0]);
            std::process::exit(1);
        }
    };

    let detector = ChangeDetector::new();

    let start = Instant::now();
    let result = detector.detect(&reference, &comparand);
    let elapsed = start.elapsed();

    tracing::info!(
        regions = result.regions.len(),
        elapsed_ms = elapsed.as_millis(),
        "Change detection complete"
    );

    // Report detection diagnostics
    tracing::debug!(
        changed_pixels = result.diagnostics.changed_pixels,
        components_found = result.diagnostics.components_found,
        components_nested = result.diagnostics.components_nested,
        components_below_area = result.diagnostics.components_below_area,
        "Detection diagnostics"
    );

    if result.regions.is_empty() {
        println!("No changes detected.");
        return;
    }

    // Print info about the detected regions
    println!("\nChanged regions:");
    println!(
        "{:>4}  {:>6}  {:>6}  {:>6}  {:>6}  {:>8}",
        "Rank", "X", "Y", "W", "H", "Area"
    );
    for (i, region) in result.regions.iter().enumerate() {
        println!(
            "{:>4}  {:>6}  {:>6}  {:>6}  {:>6}  {:>8}",
            i + 1,
            region.x(),
            region.y(),
            region.width(),
            region.height(),
            region.area
        );
    }

    // Save annotated output
    let output_path = output_dir.join(ANNOTATED_FILENAME);
    result
        .annotated
        .save_file(&output_path)
        .expect("Failed to save output image");

    tracing::info!(path = %output_path.display(), "Output saved");
    println!("\nOutput: {}", output_path.display());
}

/// Build a before/after pair: a dim room scene, then the same scene with one
/// object large enough to report and one speck below the noise cutoff.
fn synthesize_pair() -> (Image, Image) {
    let mut reference = uniform_rgb(320, 240, [24, 24, 24]);
    // Static furniture, present in both frames.
    paint_rect(&mut reference, 40, 150, 90, 60, &[70, 70, 70]);
    paint_rect(&mut reference, 210, 40, 60, 120, &[52, 52, 52]);

    let mut comparand = reference.clone();
    // The object that appeared between the frames.
    paint_rect(&mut comparand, 120, 80, 70, 50, &[230, 220, 200]);
    // A bright speck too small to survive the area filter.
    paint_rect(&mut comparand, 20, 20, 10, 10, &[255, 255, 255]);

    (reference, comparand)
}

/// Initialize tracing subscriber with console output.
fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
