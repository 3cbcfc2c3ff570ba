// ============================================================================
// Digit Store
// Limb type, storage and the scalar carry helpers everything else builds on
// ============================================================================
//
// Magnitudes are little-endian: for `[0, 1, 2, 3]`, `3` is the most
// significant limb and `0` the least significant one. A normalized magnitude
// has no trailing (most-significant) zero limbs, and zero is the empty slice.

use smallvec::SmallVec;

/// One digit of a magnitude, radix 2^64.
pub type Limb = u64;

/// Double-width type used to capture carries and partial products.
pub(crate) type Wide = u128;

/// Number of bits in a limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Limbs stored inline before spilling to the heap (512 bits).
pub const INLINE_LIMBS: usize = 8;

/// Owned limb buffer backing every magnitude.
pub type LimbVec = SmallVec<[Limb; INLINE_LIMBS]>;

// ============================================================================
// Normalization
// ============================================================================

/// Pop trailing zero limbs until the buffer is canonical.
#[inline]
pub fn normalize(x: &mut LimbVec) {
    while let Some(&0) = x.last() {
        x.pop();
    }
}

/// Borrow the canonical prefix of `x` (trailing zero limbs removed).
#[inline]
pub fn trimmed(x: &[Limb]) -> &[Limb] {
    let len = x.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1);
    &x[..len]
}

/// True if every limb is zero. The canonical zero is the empty slice.
#[inline]
pub fn is_zero(x: &[Limb]) -> bool {
    x.iter().all(|&l| l == 0)
}

/// Check if `x` carries no trailing zero limbs.
#[inline]
pub fn is_normalized(x: &[Limb]) -> bool {
    x.last() != Some(&0)
}

// ============================================================================
// Scalar helpers
// ============================================================================

/// Add with carry: returns `a + b + carry` and updates the carry flag.
#[inline(always)]
pub(crate) fn adc(a: Limb, b: Limb, carry: &mut bool) -> Limb {
    let (s1, c1) = a.overflowing_add(b);
    let (s2, c2) = s1.overflowing_add(*carry as Limb);
    *carry = c1 | c2;
    s2
}

/// Subtract with borrow: returns `a - b - borrow` and updates the borrow flag.
#[inline(always)]
pub(crate) fn sbb(a: Limb, b: Limb, borrow: &mut bool) -> Limb {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(*borrow as Limb);
    *borrow = b1 | b2;
    d2
}

/// Multiply-accumulate: returns the low limb of `acc + b * c + carry`, the
/// high limb goes to `carry`.
///
/// Cannot overflow the wide type: `(2^64 - 1)^2 + 2 * (2^64 - 1) == 2^128 - 1`.
#[inline(always)]
pub(crate) fn mac(acc: Limb, b: Limb, c: Limb, carry: &mut Limb) -> Limb {
    let wide = acc as Wide + (b as Wide) * (c as Wide) + *carry as Wide;
    *carry = (wide >> LIMB_BITS) as Limb;
    wide as Limb
}

/// Split a u128 into little-endian limbs, normalized.
#[inline]
pub(crate) fn limbs_from_u128(value: u128) -> LimbVec {
    let mut limbs: LimbVec = SmallVec::from_slice(&[value as Limb, (value >> LIMB_BITS) as Limb]);
    normalize(&mut limbs);
    limbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_normalize_strips_high_zeros() {
        let mut x: LimbVec = smallvec![1, 2, 0, 0];
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[1, 2]);

        let mut zero: LimbVec = smallvec![0, 0, 0];
        normalize(&mut zero);
        assert!(zero.is_empty());
    }

    #[test]
    fn test_trimmed_and_is_zero() {
        assert_eq!(trimmed(&[5, 0, 7, 0]), &[5, 0, 7]);
        assert!(trimmed(&[0, 0]).is_empty());
        assert!(is_zero(&[]));
        assert!(is_zero(&[0, 0]));
        assert!(!is_zero(&[0, 1]));
        assert!(is_normalized(&[]));
        assert!(!is_normalized(&[3, 0]));
    }

    #[test]
    fn test_adc_sbb() {
        let mut carry = false;
        assert_eq!(adc(Limb::MAX, 1, &mut carry), 0);
        assert!(carry);
        assert_eq!(adc(Limb::MAX, Limb::MAX, &mut carry), Limb::MAX);
        assert!(carry);

        let mut borrow = false;
        assert_eq!(sbb(0, 1, &mut borrow), Limb::MAX);
        assert!(borrow);
        assert_eq!(sbb(0, 0, &mut borrow), Limb::MAX);
        assert!(borrow);
        assert_eq!(sbb(5, 2, &mut borrow), 2);
        assert!(!borrow);
    }

    #[test]
    fn test_mac_worst_case() {
        let mut carry = Limb::MAX;
        let lo = mac(Limb::MAX, Limb::MAX, Limb::MAX, &mut carry);
        assert_eq!(lo, Limb::MAX);
        assert_eq!(carry, Limb::MAX);
    }

    #[test]
    fn test_limbs_from_u128() {
        assert!(limbs_from_u128(0).is_empty());
        assert_eq!(limbs_from_u128(7).as_slice(), &[7]);
        assert_eq!(limbs_from_u128(1u128 << 64).as_slice(), &[0, 1]);
    }
}
