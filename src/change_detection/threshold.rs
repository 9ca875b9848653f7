//! Binary change mask from a difference buffer.

use crate::common::{BitBuffer2, Buffer2};

/// Mark every pixel whose difference is at or above `cutoff`.
///
/// The boundary is left-inclusive: a difference exactly at the cutoff counts
/// as changed, one below it does not.
pub(super) fn threshold_mask(diff: &Buffer2<u8>, cutoff: u8) -> BitBuffer2 {
    let mut mask = BitBuffer2::new_default(diff.width(), diff.height());
    for (idx, &value) in diff.pixels().iter().enumerate() {
        if value >= cutoff {
            mask.set(idx, true);
        }
    }
    mask
}
