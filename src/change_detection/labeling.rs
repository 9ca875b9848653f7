//! Connected component labeling using union-find.
//!
//! Run-length based: each mask row is decomposed into horizontal runs of
//! changed pixels, runs are linked against the previous row's runs under the
//! configured connectivity, and label equivalences are resolved with a
//! union-find before being flattened to sequential labels.

use crate::common::{BitBuffer2, Buffer2};

use super::config::Connectivity;

// ============================================================================
// Runs
// ============================================================================

/// A horizontal run of changed pixels.
#[derive(Debug, Clone, Copy)]
struct Run {
    start: u32, // Starting x coordinate (inclusive)
    end: u32,   // Ending x coordinate (exclusive)
    label: u32, // Provisional label
}

impl Run {
    /// The x window in the previous row that can hold connected runs.
    /// Returns (start, end) with end exclusive.
    #[inline]
    fn search_window(&self, connectivity: Connectivity) -> (u32, u32) {
        match connectivity {
            Connectivity::Four => (self.start, self.end),
            Connectivity::Eight => (self.start.saturating_sub(1), self.end + 1),
        }
    }
}

/// Check if two runs from adjacent rows are connected.
#[inline]
fn runs_connected(prev: &Run, curr: &Run, connectivity: Connectivity) -> bool {
    match connectivity {
        Connectivity::Four => prev.start < curr.end && prev.end > curr.start,
        Connectivity::Eight => prev.start < curr.end + 1 && prev.end + 1 > curr.start,
    }
}

/// Extract the foreground runs of row `y` into `runs`.
fn extract_runs_from_row(mask: &BitBuffer2, y: usize, runs: &mut Vec<Run>) {
    let width = mask.width();
    let row_start = y * width;

    let mut x = 0;
    while x < width {
        if !mask.get(row_start + x) {
            x += 1;
            continue;
        }
        let start = x;
        while x < width && mask.get(row_start + x) {
            x += 1;
        }
        runs.push(Run {
            start: start as u32,
            end: x as u32,
            label: 0,
        });
    }
}

// ============================================================================
// LabelMap
// ============================================================================

/// A 2D label map from connected component analysis.
///
/// Wraps a `Buffer2<u32>` where each pixel holds the label of its connected
/// component: 0 for background, 1..=num_labels for components. Labels are
/// sequential and ordered by the raster position of each component's first
/// pixel, which keeps region extraction deterministic.
#[derive(Debug)]
pub struct LabelMap {
    labels: Buffer2<u32>,
    num_labels: usize,
}

impl LabelMap {
    /// Label the connected components of a binary mask.
    pub fn from_mask(mask: &BitBuffer2, connectivity: Connectivity) -> Self {
        let width = mask.width();
        let height = mask.height();

        let mut labels = Buffer2::new_filled(width, height, 0u32);
        if width == 0 || height == 0 {
            return Self {
                labels,
                num_labels: 0,
            };
        }

        let mut uf = UnionFind::new();
        let mut prev_runs: Vec<Run> = Vec::with_capacity(width / 4);
        let mut curr_runs: Vec<Run> = Vec::with_capacity(width / 4);

        for y in 0..height {
            curr_runs.clear();
            extract_runs_from_row(mask, y, &mut curr_runs);

            if curr_runs.is_empty() {
                prev_runs.clear();
                continue;
            }

            // Label runs and merge with overlapping runs from the previous row.
            let mut prev_idx = 0;
            for run in &mut curr_runs {
                let (search_start, search_end) = run.search_window(connectivity);

                // Skip previous-row runs that end before the search window.
                while prev_idx < prev_runs.len() && prev_runs[prev_idx].end <= search_start {
                    prev_idx += 1;
                }

                // Adopt the label of the first connected run; union the rest.
                let mut assigned_label = None;
                let mut check_idx = prev_idx;
                while check_idx < prev_runs.len() && prev_runs[check_idx].start < search_end {
                    let prev_run = &prev_runs[check_idx];
                    if runs_connected(prev_run, run, connectivity) {
                        match assigned_label {
                            Some(label) if label != prev_run.label => {
                                uf.union(label, prev_run.label);
                            }
                            None => assigned_label = Some(prev_run.label),
                            _ => {}
                        }
                    }
                    check_idx += 1;
                }

                run.label = assigned_label.unwrap_or_else(|| uf.make_set());

                let row_start = y * width;
                for x in run.start..run.end {
                    labels[row_start + x as usize] = run.label;
                }
            }

            std::mem::swap(&mut prev_runs, &mut curr_runs);
        }

        let num_labels = uf.flatten_labels(labels.pixels_mut());
        Self { labels, num_labels }
    }

    /// Number of connected components (excluding background).
    #[inline]
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.labels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.labels.height()
    }

    /// Label at (x, y); 0 means background.
    #[inline]
    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        *self.labels.get(x, y)
    }
}

impl std::ops::Index<usize> for LabelMap {
    type Output = u32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.labels[idx]
    }
}

// ============================================================================
// Union-Find
// ============================================================================

/// Union-find over provisional labels with path compression.
struct UnionFind {
    parent: Vec<u32>,
    next_label: u32,
}

impl UnionFind {
    fn new() -> Self {
        Self {
            parent: Vec::new(),
            next_label: 1,
        }
    }

    /// Create a new set and return its label.
    fn make_set(&mut self) -> u32 {
        let label = self.next_label;
        self.parent.push(label);
        self.next_label += 1;
        label
    }

    /// Find root with path compression.
    fn find(&mut self, label: u32) -> u32 {
        let idx = (label - 1) as usize;
        if self.parent[idx] != label {
            let root = self.find(self.parent[idx]);
            self.parent[idx] = root;
        }
        self.parent[idx]
    }

    /// Union two sets (smaller root wins).
    fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            let (smaller, larger) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[(larger - 1) as usize] = smaller;
        }
    }

    /// Flatten labels to sequential 1..n and apply to the buffer.
    fn flatten_labels(&mut self, labels: &mut [u32]) -> usize {
        if self.parent.is_empty() {
            return 0;
        }

        // Map roots to sequential labels, in provisional label order so the
        // final numbering follows raster order of first appearance.
        let mut root_to_final = vec![0u32; self.parent.len() + 1];
        let mut num_labels = 0u32;
        for label in 1..=self.parent.len() as u32 {
            let root = self.find(label);
            if root_to_final[root as usize] == 0 {
                num_labels += 1;
                root_to_final[root as usize] = num_labels;
            }
        }

        let mut label_map = vec![0u32; self.parent.len() + 1];
        for label in 1..=self.parent.len() as u32 {
            let root = self.find(label);
            label_map[label as usize] = root_to_final[root as usize];
        }

        for l in labels.iter_mut() {
            if *l != 0 {
                *l = label_map[*l as usize];
            }
        }

        num_labels as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mask_from_rows;

    #[test]
    fn empty_mask() {
        let mask = BitBuffer2::from_slice(4, 4, &[false; 16]);
        let label_map = LabelMap::from_mask(&mask, Connectivity::Eight);

        assert_eq!(label_map.num_labels(), 0);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(label_map.label_at(x, y), 0);
            }
        }
    }

    #[test]
    fn single_pixel() {
        let mask = mask_from_rows(&[
            "....", //
            ".#..", //
            "....",
        ]);
        let label_map = LabelMap::from_mask(&mask, Connectivity::Eight);

        assert_eq!(label_map.num_labels(), 1);
        for y in 0..3 {
            for x in 0..4 {
                let expected = if (x, y) == (1, 1) { 1 } else { 0 };
                assert_eq!(label_map.label_at(x, y), expected);
            }
        }
    }

    #[test]
    fn horizontal_and_vertical_lines_connect() {
        let mask = mask_from_rows(&[
            ".....", //
            "###..", //
            "..#..", //
            "..#..",
        ]);
        let label_map = LabelMap::from_mask(&mask, Connectivity::Four);

        assert_eq!(label_map.num_labels(), 1);
        assert_eq!(label_map.label_at(0, 1), label_map.label_at(2, 3));
    }

    #[test]
    fn two_separate_regions() {
        let mask = mask_from_rows(&[
            "#....#", //
            "......", //
            "......",
        ]);
        let label_map = LabelMap::from_mask(&mask, Connectivity::Eight);

        assert_eq!(label_map.num_labels(), 2);
        assert_ne!(label_map.label_at(0, 0), label_map.label_at(5, 0));
    }

    #[test]
    fn diagonal_depends_on_connectivity() {
        let mask = mask_from_rows(&[
            "#...", //
            ".#..", //
            "..#.",
        ]);

        let four = LabelMap::from_mask(&mask, Connectivity::Four);
        assert_eq!(four.num_labels(), 3);

        let eight = LabelMap::from_mask(&mask, Connectivity::Eight);
        assert_eq!(eight.num_labels(), 1);
    }

    #[test]
    fn u_shape_merges_arms() {
        // Both arms get provisional labels before the bottom row joins them.
        let mask = mask_from_rows(&[
            "#...#", //
            "#...#", //
            "#####",
        ]);
        let label_map = LabelMap::from_mask(&mask, Connectivity::Four);

        assert_eq!(label_map.num_labels(), 1);
        assert_eq!(label_map.label_at(0, 0), label_map.label_at(4, 0));
    }

    #[test]
    fn labels_are_sequential_in_raster_order() {
        let mask = mask_from_rows(&[
            ".#......#", //
            ".........", //
            "....#....",
        ]);
        let label_map = LabelMap::from_mask(&mask, Connectivity::Eight);

        assert_eq!(label_map.num_labels(), 3);
        assert_eq!(label_map.label_at(1, 0), 1);
        assert_eq!(label_map.label_at(8, 0), 2);
        assert_eq!(label_map.label_at(4, 2), 3);
    }

    #[test]
    fn touching_rows_with_offset_runs() {
        let mask = mask_from_rows(&[
            "###....", //
            "...####",
        ]);

        // Four-connectivity: the runs only share a corner, so they stay apart.
        let four = LabelMap::from_mask(&mask, Connectivity::Four);
        assert_eq!(four.num_labels(), 2);

        // Eight-connectivity: the corner contact joins them.
        let eight = LabelMap::from_mask(&mask, Connectivity::Eight);
        assert_eq!(eight.num_labels(), 1);
    }
}
