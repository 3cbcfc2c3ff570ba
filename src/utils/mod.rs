// ============================================================================
// Utilities Module
// Process-level helpers outside the arithmetic core
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
