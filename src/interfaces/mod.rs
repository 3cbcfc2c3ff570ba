// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod multiplier;

pub use multiplier::Multiplier;
