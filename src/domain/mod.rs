// ============================================================================
// Domain Models Module
// The signed big integer value type and engine configuration
// ============================================================================

pub mod bigint;
pub mod config;

pub use bigint::{BigInt, Sign};
pub use config::{ArithmeticConfig, MultiplyAlgorithmType};
