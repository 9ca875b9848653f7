//! Region extraction from a label map.
//!
//! Turns labeled components into [`ChangeRegion`] values and classifies each
//! component as outermost or nested. Only outermost regions are reported;
//! a change region fully enclosed by another one (a hole in a larger blob)
//! is dropped, matching how external contour extraction behaves.

use crate::common::BitBuffer2;
use crate::math::Aabb;

use super::config::Connectivity;
use super::labeling::LabelMap;
use super::region::ChangeRegion;

const ORTHOGONAL_NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[rustfmt::skip]
const ALL_NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Collect the bounding box and pixel area of every labeled component.
///
/// The result is indexed by `label - 1` and therefore ordered by the raster
/// position of each component's first pixel.
pub(super) fn extract_regions(labels: &LabelMap) -> Vec<ChangeRegion> {
    let mut regions = vec![
        ChangeRegion {
            bbox: Aabb::empty(),
            area: 0,
        };
        labels.num_labels()
    ];

    // Any horizontal run of foreground pixels carries a single label, so the
    // accumulation can work run by run.
    for y in 0..labels.height() {
        let mut x = 0;
        while x < labels.width() {
            let label = labels.label_at(x, y);
            if label == 0 {
                x += 1;
                continue;
            }
            let start = x;
            while x < labels.width() && labels.label_at(x, y) == label {
                x += 1;
            }

            let region = &mut regions[(label - 1) as usize];
            region.bbox.include_run(start, x, y);
            region.area += x - start;
        }
    }

    regions
}

/// Classify every component as outermost (`true`) or nested (`false`).
///
/// The outer background is flood filled from the image border using the
/// connectivity complementary to the foreground connectivity; with matching
/// connectivities a diagonally closed outline would leak. A component is
/// outermost iff it touches the image border or the outer background.
pub(super) fn external_flags(
    labels: &LabelMap,
    mask: &BitBuffer2,
    connectivity: Connectivity,
) -> Vec<bool> {
    let width = labels.width();
    let height = labels.height();
    let mut flags = vec![false; labels.num_labels()];
    if flags.is_empty() {
        return flags;
    }

    let outer = outer_background(mask, connectivity);

    // Components touching the image border are outermost by definition.
    for x in 0..width {
        for y in [0, height - 1] {
            let label = labels.label_at(x, y);
            if label != 0 {
                flags[(label - 1) as usize] = true;
            }
        }
    }
    for y in 0..height {
        for x in [0, width - 1] {
            let label = labels.label_at(x, y);
            if label != 0 {
                flags[(label - 1) as usize] = true;
            }
        }
    }

    // Interior components are outermost iff they border the outer background.
    // A component touching the outer background at all also touches it through
    // an orthogonal neighbor, so checking those covers both connectivities.
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let label = labels.label_at(x, y);
            if label == 0 || flags[(label - 1) as usize] {
                continue;
            }
            for &(dx, dy) in &ORTHOGONAL_NEIGHBORS {
                let nx = (x as i64 + dx) as usize;
                let ny = (y as i64 + dy) as usize;
                if outer.get_xy(nx, ny) {
                    flags[(label - 1) as usize] = true;
                    break;
                }
            }
        }
    }

    flags
}

/// Flood fill the background from the image border.
///
/// Returns a mask of background pixels reachable from the border without
/// crossing foreground. Background connectivity is the complement of the
/// foreground connectivity.
fn outer_background(mask: &BitBuffer2, connectivity: Connectivity) -> BitBuffer2 {
    let width = mask.width();
    let height = mask.height();

    let mut outer = BitBuffer2::new_default(width, height);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for x in 0..width {
        for y in [0, height - 1] {
            if !mask.get_xy(x, y) && !outer.get_xy(x, y) {
                outer.set_xy(x, y, true);
                stack.push((x, y));
            }
        }
    }
    for y in 0..height {
        for x in [0, width - 1] {
            if !mask.get_xy(x, y) && !outer.get_xy(x, y) {
                outer.set_xy(x, y, true);
                stack.push((x, y));
            }
        }
    }

    let offsets: &[(i64, i64)] = match connectivity {
        Connectivity::Four => &ALL_NEIGHBORS,
        Connectivity::Eight => &ORTHOGONAL_NEIGHBORS,
    };

    while let Some((x, y)) = stack.pop() {
        for &(dx, dy) in offsets {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if !mask.get_xy(nx, ny) && !outer.get_xy(nx, ny) {
                outer.set_xy(nx, ny, true);
                stack.push((nx, ny));
            }
        }
    }

    outer
}
