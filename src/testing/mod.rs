//! Testing utilities for revelio.

#![allow(dead_code)]

pub mod synthetic;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::common::BitBuffer2;

/// Initialize tracing subscriber for tests.
///
/// Reads the `RUST_LOG` environment variable, defaulting to `info` level.
/// Safe to call multiple times; only the first call installs a subscriber.
#[cfg(test)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Ensure the test output directory exists and return its path.
pub fn ensure_test_output_dir() -> &'static Path {
    static DIR: OnceLock<PathBuf> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_output");
        std::fs::create_dir_all(&dir).expect("Failed to create test_output directory");
        dir
    })
}

/// Path for a test artifact inside the test output directory.
pub fn test_output_path(name: &str) -> PathBuf {
    ensure_test_output_dir().join(name)
}

/// Deterministic RNG for reproducible tests.
///
/// Linear congruential generator; not statistically strong, but stable
/// across platforms and fast enough for per-pixel noise.
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u64) -> Self {
        // Scramble the seed once so small seeds do not start degenerate.
        Self {
            state: seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407),
        }
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Build a binary mask from rows of `#` (set) and `.` (clear) characters.
///
/// All rows must have the same length.
pub fn mask_from_rows(rows: &[&str]) -> BitBuffer2 {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());

    let mut mask = BitBuffer2::new_default(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            width,
            "mask row {} has length {}, expected {}",
            y,
            row.len(),
            width
        );
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => mask.set(y * width + x, true),
                '.' => {}
                other => panic!("unexpected mask character: {:?}", other),
            }
        }
    }
    mask
}
