// ============================================================================
// BigInt
// Signed-magnitude arbitrary-precision integer with value semantics
// ============================================================================

use crate::numeric::add::{add_assign, add_magnitudes, rsub_assign, sub_assign, sub_magnitudes};
use crate::numeric::compare::compare_magnitudes;
use crate::numeric::limbs::{limbs_from_u128, normalize, Limb, LimbVec, LIMB_BITS};
use crate::numeric::mul::mul_magnitudes;
use crate::numeric::radix::{format_magnitude, parse_magnitude, ParsedSign};
use crate::numeric::{shift, NumericError, NumericResult, ParseBigIntError};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign};
use std::str::FromStr;

/// Sign of a [`BigInt`]. Zero is always `NonNegative`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or positive
    #[default]
    NonNegative,
    /// Strictly negative
    Negative,
}

impl Sign {
    /// The opposite sign.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }

    /// Sign of a product of two values carrying `self` and `other`.
    #[inline]
    pub const fn product(self, other: Sign) -> Self {
        match (self, other) {
            (Sign::NonNegative, Sign::NonNegative) | (Sign::Negative, Sign::Negative) => {
                Sign::NonNegative
            },
            _ => Sign::Negative,
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Internally a [`Sign`] plus a little-endian magnitude of 64-bit limbs. The
/// magnitude is always normalized (no high zero limbs); zero is the empty
/// magnitude with a non-negative sign, so derived equality and hashing are
/// value equality.
///
/// Operators are implemented for every owned/borrowed combination. An owned
/// left operand is reused in place, borrowed operands always produce a
/// freshly allocated result.
///
/// # Example
/// ```
/// use bignum_engine::domain::BigInt;
///
/// let a: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let b = BigInt::from(-42);
/// let c = &a * &b + BigInt::from(7);
/// assert_eq!(c.to_string(), "-5185185138518518513851851851373");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: LimbVec,
}

impl BigInt {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonical zero.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// One.
    #[inline]
    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Build from an owned limb buffer, restoring the canonical form.
    #[inline]
    pub(crate) fn from_parts(sign: Sign, mut magnitude: LimbVec) -> Self {
        normalize(&mut magnitude);
        let sign = if magnitude.is_empty() {
            Sign::NonNegative
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    /// Create from a sign and little-endian limbs. High zero limbs are dropped.
    pub fn from_limbs(sign: Sign, limbs: &[Limb]) -> Self {
        Self::from_parts(sign, LimbVec::from_slice(limbs))
    }

    /// Create from a sign and a big-endian byte string holding the magnitude.
    pub fn from_bytes_be(sign: Sign, bytes: &[u8]) -> Self {
        const LIMB_BYTES: usize = (LIMB_BITS / 8) as usize;

        let mut magnitude = LimbVec::with_capacity(bytes.len().div_ceil(LIMB_BYTES));
        for chunk in bytes.rchunks(LIMB_BYTES) {
            let limb = chunk
                .iter()
                .fold(0 as Limb, |acc, &byte| (acc << 8) | byte as Limb);
            magnitude.push(limb);
        }
        Self::from_parts(sign, magnitude)
    }

    /// Big-endian bytes of the magnitude, without leading zero bytes.
    /// Zero yields `[0]`.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .magnitude
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .skip_while(|&b| b == 0)
            .collect();
        if bytes.is_empty() {
            bytes.push(0);
        }
        bytes
    }

    /// Parse a digit string in `radix` (2..=36), optionally prefixed by `+` or `-`.
    ///
    /// # Errors
    /// - `Empty` if nothing follows the sign
    /// - `InvalidDigit` for any character outside the radix alphabet
    /// - `InvalidRadix` if `radix` is out of range
    pub fn parse(s: &str, radix: u32) -> Result<Self, ParseBigIntError> {
        match parse_magnitude(s, radix) {
            Ok((ParsedSign::Plus, magnitude)) => Ok(Self::from_parts(Sign::NonNegative, magnitude)),
            Ok((ParsedSign::Minus, magnitude)) => Ok(Self::from_parts(Sign::Negative, magnitude)),
            Err(err) => {
                tracing::debug!(radix, len = s.len(), error = %err, "rejected big integer literal");
                Err(err)
            },
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Sign of the value.
    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Little-endian limbs of the absolute value. Empty for zero.
    #[inline]
    pub fn magnitude(&self) -> &[Limb] {
        &self.magnitude
    }

    /// Number of limbs in the magnitude.
    #[inline]
    pub fn limb_len(&self) -> usize {
        self.magnitude.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::NonNegative && !self.is_zero()
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn signum(&self) -> i32 {
        match (self.sign, self.is_zero()) {
            (_, true) => 0,
            (Sign::NonNegative, false) => 1,
            (Sign::Negative, false) => -1,
        }
    }

    /// Number of significant bits in the magnitude, 0 for zero.
    #[inline]
    pub fn bit_length(&self) -> u64 {
        shift::bit_length(&self.magnitude)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Flip the sign. O(1); zero stays zero.
    #[inline]
    pub fn negate(mut self) -> Self {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }

    /// Absolute value.
    #[inline]
    pub fn abs(mut self) -> Self {
        self.sign = Sign::NonNegative;
        self
    }

    /// Order the absolute values of `a` and `b`, ignoring signs.
    #[inline]
    pub fn compare_magnitudes(a: &BigInt, b: &BigInt) -> Ordering {
        compare_magnitudes(&a.magnitude, &b.magnitude)
    }

    /// Raise to `exp` by square-and-multiply. `x.pow(0)` is one, including zero.
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut acc = BigInt::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Render in `radix` (2..=36) with lowercase digits and a leading `-` for
    /// negative values.
    ///
    /// # Panics
    /// If `radix` is outside 2..=36.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = format_magnitude(&self.magnitude, radix);
        if self.is_negative() {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push('-');
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }

    /// AddAssign a signed magnitude, reusing this value's buffer.
    fn add_signed_assign(&mut self, rhs_sign: Sign, rhs: &[Limb]) {
        if rhs.is_empty() {
            return;
        }
        if self.is_zero() {
            self.magnitude.extend_from_slice(rhs);
            self.sign = rhs_sign;
            return;
        }

        if self.sign == rhs_sign {
            add_assign(&mut self.magnitude, rhs);
            return;
        }

        match compare_magnitudes(&self.magnitude, rhs) {
            Ordering::Equal => {
                self.magnitude.clear();
                self.sign = Sign::NonNegative;
            },
            Ordering::Greater => sub_assign(&mut self.magnitude, rhs),
            Ordering::Less => {
                rsub_assign(&mut self.magnitude, rhs);
                self.sign = rhs_sign;
            },
        }
    }

    /// Add a signed magnitude into a fresh value.
    fn add_signed(&self, rhs_sign: Sign, rhs: &[Limb]) -> BigInt {
        if rhs.is_empty() {
            return self.clone();
        }
        if self.is_zero() {
            return Self::from_parts(rhs_sign, LimbVec::from_slice(rhs));
        }

        if self.sign == rhs_sign {
            return Self::from_parts(self.sign, add_magnitudes(&self.magnitude, rhs));
        }

        match compare_magnitudes(&self.magnitude, rhs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => Self::from_parts(self.sign, sub_magnitudes(&self.magnitude, rhs)),
            Ordering::Less => Self::from_parts(rhs_sign, sub_magnitudes(rhs, &self.magnitude)),
        }
    }

    /// Product into a fresh value. Zero short-circuits.
    fn multiply(&self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        Self::from_parts(
            self.sign.product(rhs.sign),
            mul_magnitudes(&self.magnitude, &rhs.magnitude),
        )
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Signed order: sign first, then magnitude (reversed for negatives).
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::NonNegative, Sign::NonNegative) => BigInt::compare_magnitudes(self, other),
            (Sign::Negative, Sign::Negative) => BigInt::compare_magnitudes(other, self),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.clone().negate()
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: &BigInt) -> BigInt {
        self.add_signed_assign(rhs.sign, &rhs.magnitude);
        self
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    /// Accumulates into whichever operand owns the longer buffer.
    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        if rhs.magnitude.len() > self.magnitude.len() {
            rhs + &self
        } else {
            self + &rhs
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        self.add_signed(rhs.sign, &rhs.magnitude)
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        rhs + self
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed_assign(rhs.sign, &rhs.magnitude);
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        self.add_signed_assign(rhs.sign, &rhs.magnitude);
    }
}

// a - b == a + (-b)
impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self.add_signed_assign(rhs.sign.flip(), &rhs.magnitude);
        self
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: BigInt) -> BigInt {
        if rhs.magnitude.len() > self.magnitude.len() {
            rhs.negate() + &self
        } else {
            self - &rhs
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self.add_signed(rhs.sign.flip(), &rhs.magnitude)
    }
}

impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: BigInt) -> BigInt {
        rhs.negate() + self
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed_assign(rhs.sign.flip(), &rhs.magnitude);
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        self.add_signed_assign(rhs.sign.flip(), &rhs.magnitude);
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        self.multiply(rhs)
    }
}

impl Mul<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: BigInt) -> BigInt {
        self.multiply(&rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        self.multiply(rhs)
    }
}

impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: BigInt) -> BigInt {
        self.multiply(&rhs)
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.multiply(rhs);
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = self.multiply(&rhs);
    }
}

impl Shl<u64> for &BigInt {
    type Output = BigInt;

    /// Multiply by 2^bits.
    fn shl(self, bits: u64) -> BigInt {
        BigInt::from_parts(self.sign, shift::shl(&self.magnitude, bits))
    }
}

impl Shl<u64> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, bits: u64) -> BigInt {
        &self << bits
    }
}

impl Shr<u64> for &BigInt {
    type Output = BigInt;

    /// Divide the magnitude by 2^bits, truncating toward zero.
    fn shr(self, bits: u64) -> BigInt {
        BigInt::from_parts(self.sign, shift::shr(&self.magnitude, bits))
    }
}

impl Shr<u64> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, bits: u64) -> BigInt {
        &self >> bits
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

// ============================================================================
// Native integer conversions
// ============================================================================

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_parts(Sign::NonNegative, limbs_from_u128(value as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::NonNegative };
                Self::from_parts(sign, limbs_from_u128((value as i128).unsigned_abs()))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigInt> for u128 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<u128> {
        if value.is_negative() {
            return Err(NumericError::NegativeToUnsigned);
        }
        match value.magnitude.as_slice() {
            [] => Ok(0),
            [lo] => Ok(*lo as u128),
            [lo, hi] => Ok(((*hi as u128) << LIMB_BITS) | *lo as u128),
            _ => Err(NumericError::Overflow),
        }
    }
}

impl TryFrom<&BigInt> for i128 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<i128> {
        let magnitude = u128::try_from(&value.clone().abs()).map_err(|_| {
            if value.is_negative() {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        })?;

        if value.is_negative() {
            // |i128::MIN| == 2^127 is still representable.
            if magnitude > 1u128 << 127 {
                Err(NumericError::Underflow)
            } else {
                Ok(0u128.wrapping_sub(magnitude) as i128)
            }
        } else {
            i128::try_from(magnitude).map_err(|_| NumericError::Overflow)
        }
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<u64> {
        let wide = u128::try_from(value)?;
        u64::try_from(wide).map_err(|_| NumericError::Overflow)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = NumericError;

    fn try_from(value: &BigInt) -> NumericResult<i64> {
        let wide = i128::try_from(value)?;
        i64::try_from(wide).map_err(|_| {
            if wide < 0 {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        })
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format_magnitude(&self.magnitude, 10);
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({}, limbs={})", self, self.magnitude.len())
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parse a decimal literal.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s, 10)
    }
}

// ============================================================================
// Serde (decimal string on the wire)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::BigInt;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for BigInt {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct BigIntVisitor;

    impl<'de> Visitor<'de> for BigIntVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal integer string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }
    }

    impl<'de> Deserialize<'de> for BigInt {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
            deserializer.deserialize_any(BigIntVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
