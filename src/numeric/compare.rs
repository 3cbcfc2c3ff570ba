// ============================================================================
// Comparator
// Allocation-free ordering of two magnitudes
// ============================================================================

use super::limbs::{trimmed, Limb};
use std::cmp::Ordering;

/// Compare two magnitudes, little-endian.
///
/// Length decides first (the canonical length is a valid magnitude proxy),
/// then limbs from most to least significant; the first mismatch wins.
/// Trailing zero limbs are ignored, so unnormalized halves produced inside
/// the multiplier compare correctly too.
#[inline]
pub fn compare_magnitudes(x: &[Limb], y: &[Limb]) -> Ordering {
    let x = trimmed(x);
    let y = trimmed(y);

    match x.len().cmp(&y.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
        match xi.cmp(yi) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Check if `x >= y` as magnitudes.
#[inline]
pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
    compare_magnitudes(x, y) != Ordering::Less
}
