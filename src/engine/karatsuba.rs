// ============================================================================
// Karatsuba Multiplier
// Split-and-combine multiplication above a limb threshold
// ============================================================================

use crate::interfaces::Multiplier;
use crate::numeric::limbs::trimmed;
use crate::numeric::mul::mul_magnitudes_with;
use crate::numeric::{Limb, LimbVec, KARATSUBA_THRESHOLD, MIN_KARATSUBA_THRESHOLD};

/// Karatsuba multiplication: three half-size products instead of four.
///
/// Operands whose shorter side is at most `threshold` limbs go to the
/// schoolbook kernel, so results are identical to [`SchoolbookMultiplier`]
/// on every input.
///
/// [`SchoolbookMultiplier`]: super::SchoolbookMultiplier
#[derive(Debug, Clone, Copy)]
pub struct KaratsubaMultiplier {
    threshold: usize,
}

impl KaratsubaMultiplier {
    /// Create with a limb threshold, raised to [`MIN_KARATSUBA_THRESHOLD`] if lower.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(MIN_KARATSUBA_THRESHOLD),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for KaratsubaMultiplier {
    fn default() -> Self {
        Self::new(KARATSUBA_THRESHOLD)
    }
}

impl Multiplier for KaratsubaMultiplier {
    fn multiply_magnitudes(&self, x: &[Limb], y: &[Limb]) -> LimbVec {
        let (x, y) = (trimmed(x), trimmed(y));
        if x.len().min(y.len()) > self.threshold {
            tracing::trace!(
                x_limbs = x.len(),
                y_limbs = y.len(),
                threshold = self.threshold,
                "karatsuba multiply"
            );
        }
        mul_magnitudes_with(x, y, self.threshold)
    }

    fn name(&self) -> &str {
        "Karatsuba"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BigInt;
    use crate::engine::SchoolbookMultiplier;

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(KaratsubaMultiplier::new(0).threshold(), MIN_KARATSUBA_THRESHOLD);
        assert_eq!(KaratsubaMultiplier::default().threshold(), KARATSUBA_THRESHOLD);
    }

    #[test]
    fn test_matches_schoolbook_on_large_operands() {
        let a = BigInt::from(0xdead_beef_u64 as i64).pow(150);
        let b = BigInt::from(-0x1234_5678_9abc_i64).pow(90);
        assert!(a.limb_len() > 8 && b.limb_len() > 8);

        let karatsuba = KaratsubaMultiplier::new(4);
        let schoolbook = SchoolbookMultiplier::new();
        assert_eq!(karatsuba.multiply(&a, &b), schoolbook.multiply(&a, &b));
        assert_eq!(karatsuba.multiply(&b, &b), schoolbook.multiply(&b, &b));
        assert_eq!(karatsuba.name(), "Karatsuba");
    }
}
