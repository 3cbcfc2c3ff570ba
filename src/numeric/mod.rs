// ============================================================================
// Numeric Module
// Limb-level arbitrary-precision arithmetic on little-endian magnitudes
// ============================================================================
//
// This module provides:
// - Limb/LimbVec: the Digit Store (radix 2^64, SmallVec-backed)
// - compare_magnitudes: allocation-free ordering
// - add/sub: carry and borrow propagation
// - mul: schoolbook and Karatsuba kernels
// - shift: powers-of-two scaling and bit length
// - radix: digit string codec
// - NumericError/ParseBigIntError: error types
//
// Design principles:
// - Functions work on `&[Limb]` and return normalized `LimbVec`s
// - In-place variants (`*_assign`) only touch the buffer they are handed
// - Sign handling lives one layer up, in `domain::BigInt`

mod errors;

pub mod add;
pub mod compare;
pub mod limbs;
pub mod mul;
pub mod radix;
pub mod shift;

pub use compare::compare_magnitudes;
pub use errors::{NumericError, NumericResult, ParseBigIntError, ParseErrorKind};
pub use limbs::{Limb, LimbVec, INLINE_LIMBS, LIMB_BITS};
pub use mul::{KARATSUBA_THRESHOLD, MIN_KARATSUBA_THRESHOLD};
