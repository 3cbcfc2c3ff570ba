// ============================================================================
// Schoolbook Multiplier
// Grade-school long multiplication at every operand size
// ============================================================================

use crate::interfaces::Multiplier;
use crate::numeric::mul::{mul_limb_assign, schoolbook_mul};
use crate::numeric::{Limb, LimbVec};

/// Long multiplication with u128 accumulation, O(n·m).
///
/// Serves as the reference result for faster strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchoolbookMultiplier;

impl SchoolbookMultiplier {
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for SchoolbookMultiplier {
    fn multiply_magnitudes(&self, x: &[Limb], y: &[Limb]) -> LimbVec {
        // Single-limb operands skip the row loop
        match (x, y) {
            ([single], other) | (other, [single]) => {
                let mut z = LimbVec::from_slice(other);
                mul_limb_assign(&mut z, *single);
                crate::numeric::limbs::normalize(&mut z);
                z
            },
            _ => schoolbook_mul(x, y),
        }
    }

    fn name(&self) -> &str {
        "Schoolbook"
    }
}
