// ============================================================================
// Multiplier Kernels
// Schoolbook and split-and-combine (Karatsuba) products of magnitudes
// ============================================================================
//
// Every kernel returns a normalized buffer of at most `x.len() + y.len()`
// limbs. The kernels accept unnormalized inputs (Karatsuba halves may carry
// high zero limbs) and never read past the slices they are given.

use super::add::{add_assign_at, add_magnitudes, sub_assign};
use super::limbs::{mac, normalize, trimmed, Limb, LimbVec};

/// Default operand length (in limbs) above which Karatsuba takes over.
///
/// Long multiplication wins below a few hundred limbs of 64 bits on common
/// hardware; 32 limbs (2048 bits) keeps the recursion shallow for the
/// growing-chain workload while still paying off once operands get large.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Smallest threshold the split-and-combine recursion accepts.
pub const MIN_KARATSUBA_THRESHOLD: usize = 4;

// ============================================================================
// Small (limb) multiplication
// ============================================================================

/// MulAssign a single limb into a magnitude.
pub fn mul_limb_assign(x: &mut LimbVec, y: Limb) {
    if y == 0 {
        x.clear();
        return;
    }

    let mut carry: Limb = 0;
    for xi in x.iter_mut() {
        *xi = mac(0, *xi, y, &mut carry);
    }
    if carry != 0 {
        x.push(carry);
    }
}

/// Multiply-add a single limb in place: `x = x * y + addend`.
pub fn mul_add_limb_assign(x: &mut LimbVec, y: Limb, addend: Limb) {
    let mut carry = addend;
    for xi in x.iter_mut() {
        *xi = mac(0, *xi, y, &mut carry);
    }
    if carry != 0 {
        x.push(carry);
    }
}

// ============================================================================
// Schoolbook
// ============================================================================

/// Grade-school multiplication, O(n·m).
///
/// Each row accumulates `x[i] * y[j]` into `z[i + j]` with a u128
/// intermediate, the row's final carry lands in `z[i + y.len()]`, which no
/// earlier row has written.
pub fn schoolbook_mul(x: &[Limb], y: &[Limb]) -> LimbVec {
    let x = trimmed(x);
    let y = trimmed(y);
    if x.is_empty() || y.is_empty() {
        return LimbVec::new();
    }

    let mut z = LimbVec::from_elem(0, x.len() + y.len());
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry: Limb = 0;
        for (j, &yj) in y.iter().enumerate() {
            z[i + j] = mac(z[i + j], xi, yj, &mut carry);
        }
        z[i + y.len()] = carry;
    }

    normalize(&mut z);
    z
}

// ============================================================================
// Karatsuba
// ============================================================================

/// Split a buffer at limb `m` into (lo, hi).
#[inline]
fn split_at(z: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
    if z.len() <= m {
        (z, &[])
    } else {
        z.split_at(m)
    }
}

/// Karatsuba product with the shorter operand ordered first.
///
/// `threshold` is clamped to [`MIN_KARATSUBA_THRESHOLD`].
pub fn karatsuba_mul(x: &[Limb], y: &[Limb], threshold: usize) -> LimbVec {
    let threshold = threshold.max(MIN_KARATSUBA_THRESHOLD);
    let x = trimmed(x);
    let y = trimmed(y);
    if x.len() <= y.len() {
        karatsuba_ordered(x, y, threshold)
    } else {
        karatsuba_ordered(y, x, threshold)
    }
}

/// Assumes `x.len() <= y.len()`.
fn karatsuba_ordered(x: &[Limb], y: &[Limb], threshold: usize) -> LimbVec {
    if x.is_empty() {
        LimbVec::new()
    } else if x.len() <= threshold {
        schoolbook_mul(x, y)
    } else if x.len() < y.len() / 2 {
        karatsuba_uneven(x, y, threshold)
    } else {
        // z = z2·B^2m + (z1 - z2 - z0)·B^m + z0
        let m = y.len() / 2;
        let (xl, xh) = split_at(x, m);
        let (yl, yh) = split_at(y, m);

        let z0 = karatsuba_mul(xl, yl, threshold);
        let z2 = karatsuba_mul(xh, yh, threshold);
        let mut z1 = karatsuba_mul(&add_magnitudes(xl, xh), &add_magnitudes(yl, yh), threshold);
        sub_assign(&mut z1, &z2);
        sub_assign(&mut z1, &z0);

        let mut result = LimbVec::with_capacity(x.len() + y.len());
        result.extend_from_slice(&z0);
        add_assign_at(&mut result, &z1, m);
        add_assign_at(&mut result, &z2, 2 * m);
        normalize(&mut result);
        result
    }
}

/// Karatsuba where `y` is much longer than `x`: long multiplication over
/// `x.len()`-sized chunks of `y`, each chunk product done by Karatsuba.
fn karatsuba_uneven(x: &[Limb], mut y: &[Limb], threshold: usize) -> LimbVec {
    let mut result = LimbVec::from_elem(0, x.len() + y.len());

    let mut start = 0;
    while !y.is_empty() {
        let m = x.len().min(y.len());
        let (yl, yh) = y.split_at(m);
        let product = karatsuba_mul(x, yl, threshold);
        add_assign_at(&mut result, &product, start);
        y = yh;
        start += m;
    }

    normalize(&mut result);
    result
}

// ============================================================================
// Dispatch
// ============================================================================

/// Multiply two magnitudes with the default strategy.
///
/// Zero short-circuits, single-limb operands take the scalar path, and the
/// shorter operand's length picks schoolbook or Karatsuba.
pub fn mul_magnitudes(x: &[Limb], y: &[Limb]) -> LimbVec {
    mul_magnitudes_with(x, y, KARATSUBA_THRESHOLD)
}

/// Multiply two magnitudes switching to Karatsuba above `threshold` limbs.
pub fn mul_magnitudes_with(x: &[Limb], y: &[Limb], threshold: usize) -> LimbVec {
    let x = trimmed(x);
    let y = trimmed(y);
    match (x.len(), y.len()) {
        (0, _) | (_, 0) => LimbVec::new(),
        (1, _) => {
            let mut z = LimbVec::from_slice(y);
            mul_limb_assign(&mut z, x[0]);
            z
        }
        (_, 1) => {
            let mut z = LimbVec::from_slice(x);
            mul_limb_assign(&mut z, y[0]);
            z
        }
        (n, m) if n.min(m) <= threshold => schoolbook_mul(x, y),
        _ => karatsuba_mul(x, y, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::limbs::limbs_from_u128;

    /// Deterministic pseudo-random limbs (xorshift), no trailing zero limb.
    fn limbs(seed: u64, len: usize) -> Vec<Limb> {
        let mut state = seed | 1;
        let mut out: Vec<Limb> = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state
            })
            .collect();
        if let Some(last) = out.last_mut() {
            *last |= 1;
        }
        out
    }

    #[test]
    fn test_schoolbook_small_values() {
        let z = schoolbook_mul(&[6], &[7]);
        assert_eq!(z.as_slice(), &[42]);

        let max = Limb::MAX as u128;
        let z = schoolbook_mul(&[Limb::MAX], &[Limb::MAX]);
        assert_eq!(z, limbs_from_u128(max * max));
    }

    #[test]
    fn test_schoolbook_zero_and_unnormalized() {
        assert!(schoolbook_mul(&[], &[1, 2]).is_empty());
        assert!(schoolbook_mul(&[0, 0], &[1, 2]).is_empty());
        assert_eq!(schoolbook_mul(&[3, 0], &[5, 0, 0]).as_slice(), &[15]);
    }

    #[test]
    fn test_result_length_bound() {
        let x = vec![Limb::MAX; 5];
        let y = vec![Limb::MAX; 3];
        let z = schoolbook_mul(&x, &y);
        assert_eq!(z.len(), 8);
    }

    #[test]
    fn test_mul_limb_assign() {
        let mut x = LimbVec::from_slice(&[Limb::MAX, 1]);
        mul_limb_assign(&mut x, 2);
        assert_eq!(x.as_slice(), &[Limb::MAX - 1, 3]);

        mul_limb_assign(&mut x, 0);
        assert!(x.is_empty());
    }

    #[test]
    fn test_mul_add_limb_assign() {
        let mut x = LimbVec::from_slice(&[10]);
        mul_add_limb_assign(&mut x, 10, 5);
        assert_eq!(x.as_slice(), &[105]);

        let mut empty = LimbVec::new();
        mul_add_limb_assign(&mut empty, 10, 7);
        assert_eq!(empty.as_slice(), &[7]);
    }

    #[test]
    fn test_karatsuba_matches_schoolbook_balanced() {
        for len in [5, 8, 17, 33, 64, 100] {
            let x = limbs(len as u64, len);
            let y = limbs(len as u64 + 1000, len);
            assert_eq!(
                karatsuba_mul(&x, &y, MIN_KARATSUBA_THRESHOLD),
                schoolbook_mul(&x, &y),
                "len {}",
                len
            );
        }
    }

    #[test]
    fn test_karatsuba_matches_schoolbook_uneven() {
        let x = limbs(7, 9);
        let y = limbs(11, 131);
        assert_eq!(karatsuba_mul(&x, &y, 4), schoolbook_mul(&x, &y));
        assert_eq!(karatsuba_mul(&y, &x, 4), schoolbook_mul(&x, &y));
    }

    #[test]
    fn test_karatsuba_all_ones_carries() {
        let x = vec![Limb::MAX; 40];
        let y = vec![Limb::MAX; 37];
        assert_eq!(karatsuba_mul(&x, &y, 4), schoolbook_mul(&x, &y));
    }

    #[test]
    fn test_karatsuba_threshold_clamped() {
        let x = limbs(3, 12);
        let y = limbs(4, 12);
        assert_eq!(karatsuba_mul(&x, &y, 0), schoolbook_mul(&x, &y));
    }

    #[test]
    fn test_dispatch_paths_agree() {
        let x = limbs(21, 70);
        let y = limbs(22, 45);
        let reference = schoolbook_mul(&x, &y);
        assert_eq!(mul_magnitudes(&x, &y), reference);
        assert_eq!(mul_magnitudes_with(&x, &y, 8), reference);
        assert_eq!(mul_magnitudes_with(&x, &y, usize::MAX), reference);
        assert_eq!(mul_magnitudes(&[3], &y), schoolbook_mul(&[3], &y));
        assert!(mul_magnitudes(&x, &[]).is_empty());
    }
}
