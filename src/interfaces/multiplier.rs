// ============================================================================
// Multiplier Interface
// Defines the contract for pluggable multiplication algorithms
// ============================================================================

use crate::domain::BigInt;
use crate::numeric::{Limb, LimbVec};

/// Strategy pattern interface for multiplication algorithms
/// Implementations: Schoolbook, Karatsuba
pub trait Multiplier: Send + Sync {
    /// Multiply two little-endian magnitudes
    ///
    /// # Arguments
    /// * `x`, `y` - Magnitudes, possibly with high zero limbs
    ///
    /// # Returns
    /// Normalized product of at most `x.len() + y.len()` limbs
    fn multiply_magnitudes(&self, x: &[Limb], y: &[Limb]) -> LimbVec;

    /// Get the algorithm name for logging/stats
    fn name(&self) -> &str;

    /// Signed product: non-negative iff the signs agree, zero if either
    /// operand is zero (returned without touching the kernel)
    fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        if a.is_zero() || b.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_parts(
            a.sign().product(b.sign()),
            self.multiply_magnitudes(a.magnitude(), b.magnitude()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::mul::schoolbook_mul;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Counts kernel invocations so the zero short-circuit is observable
    struct CountingMultiplier {
        calls: AtomicUsize,
    }

    impl Multiplier for CountingMultiplier {
        fn multiply_magnitudes(&self, x: &[Limb], y: &[Limb]) -> LimbVec {
            self.calls.fetch_add(1, Ordering::Relaxed);
            schoolbook_mul(x, y)
        }

        fn name(&self) -> &str {
            "Counting"
        }
    }

    #[test]
    fn test_trait_can_be_implemented() {
        let multiplier = CountingMultiplier {
            calls: AtomicUsize::new(0),
        };
        assert_eq!(multiplier.name(), "Counting");
        let product = multiplier.multiply(&BigInt::from(-6), &BigInt::from(7));
        assert_eq!(product, BigInt::from(-42));
        assert_eq!(multiplier.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_zero_short_circuits() {
        let multiplier = CountingMultiplier {
            calls: AtomicUsize::new(0),
        };
        let product = multiplier.multiply(&BigInt::from(-6), &BigInt::zero());
        assert!(product.is_zero());
        assert!(!product.is_negative());
        assert_eq!(multiplier.calls.load(Ordering::Relaxed), 0);
    }
}
