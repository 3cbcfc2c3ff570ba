// ============================================================================
// Bit Shifts
// Multiplication and truncating division by powers of two on magnitudes
// ============================================================================

use super::limbs::{normalize, trimmed, Limb, LimbVec, LIMB_BITS};

/// Number of significant bits in the magnitude, 0 for zero.
#[inline]
pub fn bit_length(x: &[Limb]) -> u64 {
    let x = trimmed(x);
    match x.last() {
        None => 0,
        Some(&top) => x.len() as u64 * LIMB_BITS as u64 - top.leading_zeros() as u64,
    }
}

/// Shift-left by `n` bits (multiply by 2^n).
pub fn shl(x: &[Limb], n: u64) -> LimbVec {
    let x = trimmed(x);
    if x.is_empty() {
        return LimbVec::new();
    }

    let limb_shift = (n / LIMB_BITS as u64) as usize;
    let bit_shift = (n % LIMB_BITS as u64) as u32;

    let mut z = LimbVec::with_capacity(x.len() + limb_shift + 1);
    z.resize(limb_shift, 0);

    if bit_shift == 0 {
        z.extend_from_slice(x);
    } else {
        // Each limb takes its own bits shifted up plus the spill of the
        // previous limb shifted down.
        let mut prev: Limb = 0;
        for &xi in x {
            z.push((xi << bit_shift) | (prev >> (LIMB_BITS - bit_shift)));
            prev = xi;
        }
        let spill = prev >> (LIMB_BITS - bit_shift);
        if spill != 0 {
            z.push(spill);
        }
    }
    z
}

/// Shift-right by `n` bits (divide by 2^n, truncating).
pub fn shr(x: &[Limb], n: u64) -> LimbVec {
    let x = trimmed(x);
    let limb_shift = n / LIMB_BITS as u64;
    if limb_shift >= x.len() as u64 {
        return LimbVec::new();
    }

    let x = &x[limb_shift as usize..];
    let bit_shift = (n % LIMB_BITS as u64) as u32;

    let mut z = LimbVec::with_capacity(x.len());
    if bit_shift == 0 {
        z.extend_from_slice(x);
    } else {
        for (i, &xi) in x.iter().enumerate() {
            let high = x.get(i + 1).map_or(0, |&next| next << (LIMB_BITS - bit_shift));
            z.push((xi >> bit_shift) | high);
        }
    }
    normalize(&mut z);
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(&[]), 0);
        assert_eq!(bit_length(&[1]), 1);
        assert_eq!(bit_length(&[Limb::MAX]), 64);
        assert_eq!(bit_length(&[0, 1]), 65);
        assert_eq!(bit_length(&[0, 1, 0]), 65);
    }

    #[test]
    fn test_shl_within_and_across_limbs() {
        assert_eq!(shl(&[1], 3).as_slice(), &[8]);
        assert_eq!(shl(&[1 << 63], 1).as_slice(), &[0, 1]);
        assert_eq!(shl(&[5], 128).as_slice(), &[0, 0, 5]);
        assert_eq!(shl(&[Limb::MAX], 68).as_slice(), &[0, Limb::MAX << 4, 0xF]);
        assert!(shl(&[], 10).is_empty());
    }

    #[test]
    fn test_shr_truncates() {
        assert_eq!(shr(&[8], 3).as_slice(), &[1]);
        assert_eq!(shr(&[7], 3).as_slice(), &[] as &[Limb]);
        assert_eq!(shr(&[0, 1], 1).as_slice(), &[1 << 63]);
        assert_eq!(shr(&[0, 0, 5], 128).as_slice(), &[5]);
        assert!(shr(&[1, 2], 1000).is_empty());
    }

    #[test]
    fn test_shl_then_shr_is_identity() {
        let x = [0x1234_5678_9abc_def0, 0xfedc_ba98, 42];
        for n in [0, 1, 17, 64, 65, 200] {
            assert_eq!(shr(&shl(&x, n), n).as_slice(), &x);
        }
    }
}
