// ============================================================================
// Arithmetic Chains
// Folds that feed each result back in as the next left operand
// ============================================================================

use crate::domain::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operation applied at every step of a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// result = result + operand
    Add,
    /// result = result - operand
    Sub,
    /// result = result * operand
    Mul,
}

/// A fold `result = op(result, operand)` repeated `iterations` times from `seed`.
///
/// With `Mul` the running value grows by roughly `operand.limb_len()` limbs
/// per step, so total work is quadratic in the iteration count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chain {
    pub operation: Operation,
    pub seed: BigInt,
    pub operand: BigInt,
    pub iterations: usize,
}

impl Chain {
    pub fn new(operation: Operation, seed: BigInt, operand: BigInt, iterations: usize) -> Self {
        Self {
            operation,
            seed,
            operand,
            iterations,
        }
    }
}
