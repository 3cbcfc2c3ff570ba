// ============================================================================
// Adder / Subtractor
// Limb-wise carry and borrow propagation over magnitudes
// ============================================================================

use super::compare::greater_equal;
use super::limbs::{adc, normalize, sbb, Limb, LimbVec};

// ============================================================================
// Addition
// ============================================================================

/// AddAssign `y` into `x`, with `y` aligned at limb `start` of `x`.
///
/// Grows `x` as needed, the final carry lands in a new most-significant limb.
pub fn add_assign_at(x: &mut LimbVec, y: &[Limb], start: usize) {
    if x.len() < start + y.len() {
        x.resize(start + y.len(), 0);
    }

    let mut carry = false;
    for (xi, &yi) in x[start..].iter_mut().zip(y.iter()) {
        *xi = adc(*xi, yi, &mut carry);
    }

    // Ripple the carry through the rest of x.
    let mut index = start + y.len();
    while carry && index < x.len() {
        x[index] = adc(x[index], 0, &mut carry);
        index += 1;
    }

    if carry {
        x.push(1);
    }
}

/// AddAssign magnitudes.
#[inline]
pub fn add_assign(x: &mut LimbVec, y: &[Limb]) {
    add_assign_at(x, y, 0);
}

/// Add two magnitudes into a fresh buffer.
pub fn add_magnitudes(x: &[Limb], y: &[Limb]) -> LimbVec {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut z = LimbVec::with_capacity(long.len() + 1);
    z.extend_from_slice(long);
    add_assign(&mut z, short);
    normalize(&mut z);
    z
}

// ============================================================================
// Subtraction
// ============================================================================

/// SubAssign `y` from `x`, requires `x >= y`.
///
/// # Panics
/// If the borrow escapes the most-significant limb, i.e. the operands were
/// passed in the wrong order.
pub fn sub_assign(x: &mut LimbVec, y: &[Limb]) {
    debug_assert!(greater_equal(x, y));

    let mut borrow = false;
    for (index, &yi) in y.iter().enumerate() {
        match x.get_mut(index) {
            Some(xi) => *xi = sbb(*xi, yi, &mut borrow),
            None if yi == 0 && !borrow => continue,
            None => panic!("magnitude subtraction underflow"),
        }
    }

    let mut index = y.len();
    while borrow && index < x.len() {
        x[index] = sbb(x[index], 0, &mut borrow);
        index += 1;
    }

    if borrow {
        panic!("magnitude subtraction underflow");
    }
    normalize(x);
}

/// Reverse SubAssign: `x = y - x`, requires `y >= x`.
///
/// # Panics
/// If the borrow escapes the most-significant limb.
pub fn rsub_assign(x: &mut LimbVec, y: &[Limb]) {
    debug_assert!(greater_equal(y, x));

    if x.len() < y.len() {
        x.resize(y.len(), 0);
    }

    let mut borrow = false;
    for (index, xi) in x.iter_mut().enumerate() {
        let yi = y.get(index).copied().unwrap_or(0);
        *xi = sbb(yi, *xi, &mut borrow);
    }

    if borrow {
        panic!("magnitude subtraction underflow");
    }
    normalize(x);
}

/// Subtract `y` from `x` into a fresh buffer, requires `x >= y`.
pub fn sub_magnitudes(x: &[Limb], y: &[Limb]) -> LimbVec {
    let mut z = LimbVec::from_slice(x);
    sub_assign(&mut z, y);
    z
}
