// ============================================================================
// Arithmetic Configuration
// Multiplication strategy and instrumentation settings for an engine
// ============================================================================

use crate::numeric::{KARATSUBA_THRESHOLD, MIN_KARATSUBA_THRESHOLD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Multiply Algorithm Type
// ============================================================================

/// Defines the multiplication algorithm an engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MultiplyAlgorithmType {
    /// Grade-school long multiplication, O(n·m) at every size
    /// Use case: short operands, reference results
    Schoolbook,

    /// Split-and-combine (Karatsuba) above a limb threshold, schoolbook below
    /// Use case: repeated multiplication chains whose operands keep growing
    Karatsuba {
        /// Shorter-operand length (in 64-bit limbs) above which splitting starts
        threshold: usize,
    },
}

impl Default for MultiplyAlgorithmType {
    fn default() -> Self {
        MultiplyAlgorithmType::Karatsuba {
            threshold: KARATSUBA_THRESHOLD,
        }
    }
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Configuration for creating an arithmetic engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Multiplication algorithm
    pub multiply_algorithm: MultiplyAlgorithmType,

    /// Record per-operation counts and elapsed time
    pub collect_stats: bool,
}

impl ArithmeticConfig {
    /// Create a new configuration with the given algorithm, stats disabled
    pub fn new(multiply_algorithm: MultiplyAlgorithmType) -> Self {
        Self {
            multiply_algorithm,
            collect_stats: false,
        }
    }

    /// Builder method: Enable or disable statistics collection
    pub fn with_stats(mut self, collect_stats: bool) -> Self {
        self.collect_stats = collect_stats;
        self
    }

    /// Builder method: Replace the multiplication algorithm
    pub fn with_multiply_algorithm(mut self, multiply_algorithm: MultiplyAlgorithmType) -> Self {
        self.multiply_algorithm = multiply_algorithm;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.multiply_algorithm {
            MultiplyAlgorithmType::Karatsuba { threshold } if threshold < MIN_KARATSUBA_THRESHOLD => {
                Err(format!(
                    "Karatsuba threshold must be at least {} limbs, got {}",
                    MIN_KARATSUBA_THRESHOLD, threshold
                ))
            },
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// Schoolbook-only configuration
    pub fn schoolbook() -> Self {
        Self::new(MultiplyAlgorithmType::Schoolbook)
    }

    /// Karatsuba above `threshold` limbs
    pub fn karatsuba(threshold: usize) -> Self {
        Self::new(MultiplyAlgorithmType::Karatsuba { threshold })
    }

    /// Default algorithm with statistics enabled
    pub fn instrumented() -> Self {
        Self::default().with_stats(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ArithmeticConfig::default();
        assert_eq!(
            config.multiply_algorithm,
            MultiplyAlgorithmType::Karatsuba {
                threshold: KARATSUBA_THRESHOLD
            }
        );
        assert!(!config.collect_stats);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            ArithmeticConfig::schoolbook().multiply_algorithm,
            MultiplyAlgorithmType::Schoolbook
        );
        assert_eq!(
            ArithmeticConfig::karatsuba(64).multiply_algorithm,
            MultiplyAlgorithmType::Karatsuba { threshold: 64 }
        );
        assert!(ArithmeticConfig::instrumented().collect_stats);
    }

    #[test]
    fn test_validation_rejects_tiny_threshold() {
        let config = ArithmeticConfig::karatsuba(1);
        let err = config.validate().unwrap_err();
        assert!(err.contains("at least 4"));
        assert!(ArithmeticConfig::karatsuba(MIN_KARATSUBA_THRESHOLD)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ArithmeticConfig::schoolbook()
            .with_stats(true)
            .with_multiply_algorithm(MultiplyAlgorithmType::Karatsuba { threshold: 8 });
        assert!(config.collect_stats);
        assert_eq!(
            config.multiply_algorithm,
            MultiplyAlgorithmType::Karatsuba { threshold: 8 }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = ArithmeticConfig::karatsuba(48).with_stats(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: ArithmeticConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
