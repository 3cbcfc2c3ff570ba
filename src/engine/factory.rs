// ============================================================================
// Arithmetic Engine Factory
// Creates arithmetic engines with proper configuration
// ============================================================================

use crate::domain::config::{ArithmeticConfig, MultiplyAlgorithmType};
use crate::engine::{ArithmeticEngine, KaratsubaMultiplier, SchoolbookMultiplier};
use crate::interfaces::Multiplier;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an arithmetic engine from configuration
///
/// # Arguments
/// * `config` - Multiplication strategy and stats settings
///
/// # Returns
/// * `Result<ArithmeticEngine, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use bignum_engine::prelude::*;
///
/// let engine = create_from_config(ArithmeticConfig::karatsuba(16)).unwrap();
/// let product = engine.mul(&BigInt::from(6), &BigInt::from(-7));
/// assert_eq!(product.to_string(), "-42");
/// ```
pub fn create_from_config(config: ArithmeticConfig) -> Result<ArithmeticEngine, String> {
    config.validate()?;

    let multiplier = create_multiplier(&config.multiply_algorithm)?;
    tracing::debug!(
        multiplier = multiplier.name(),
        collect_stats = config.collect_stats,
        "creating arithmetic engine"
    );

    let engine = if config.collect_stats {
        ArithmeticEngine::with_stats(multiplier)
    } else {
        ArithmeticEngine::new(multiplier)
    };

    Ok(engine)
}

/// Creates the multiplication strategy named by `algo_type`
pub fn create_multiplier(algo_type: &MultiplyAlgorithmType) -> Result<Box<dyn Multiplier>, String> {
    match algo_type {
        MultiplyAlgorithmType::Schoolbook => Ok(Box::new(SchoolbookMultiplier::new())),

        MultiplyAlgorithmType::Karatsuba { threshold } => {
            ArithmeticConfig::new(*algo_type).validate()?;
            Ok(Box::new(KaratsubaMultiplier::new(*threshold)))
        },
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating arithmetic engines with fluent API
///
/// # Example
/// ```
/// use bignum_engine::engine::ArithmeticEngineBuilder;
///
/// let engine = ArithmeticEngineBuilder::new()
///     .karatsuba_multiplication(8)
///     .with_stats()
///     .build()
///     .unwrap();
/// assert_eq!(engine.multiplier_name(), "Karatsuba");
/// assert!(engine.stats().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArithmeticEngineBuilder {
    config: ArithmeticConfig,
}

impl ArithmeticEngineBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ArithmeticConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Multiplication Algorithm
    // ========================================================================

    /// Configure schoolbook multiplication at every size
    pub fn schoolbook_multiplication(mut self) -> Self {
        self.config.multiply_algorithm = MultiplyAlgorithmType::Schoolbook;
        self
    }

    /// Configure Karatsuba multiplication above `threshold` limbs
    pub fn karatsuba_multiplication(mut self, threshold: usize) -> Self {
        self.config.multiply_algorithm = MultiplyAlgorithmType::Karatsuba { threshold };
        self
    }

    // ========================================================================
    // Instrumentation
    // ========================================================================

    /// Record per-operation counts and timings
    pub fn with_stats(mut self) -> Self {
        self.config.collect_stats = true;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the arithmetic engine
    pub fn build(self) -> Result<ArithmeticEngine, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ArithmeticConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BigInt;

    #[test]
    fn test_create_schoolbook_engine() {
        let engine = create_from_config(ArithmeticConfig::schoolbook()).unwrap();
        assert_eq!(engine.multiplier_name(), "Schoolbook");
        assert!(engine.stats().is_none());
    }

    #[test]
    fn test_create_default_engine() {
        let engine = create_from_config(ArithmeticConfig::default()).unwrap();
        assert_eq!(engine.multiplier_name(), "Karatsuba");
    }

    #[test]
    fn test_create_instrumented_engine() {
        let engine = create_from_config(ArithmeticConfig::instrumented()).unwrap();
        assert!(engine.stats().is_some());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = create_from_config(ArithmeticConfig::karatsuba(2)).unwrap_err();
        assert!(err.contains("at least 4"));
        assert!(create_multiplier(&MultiplyAlgorithmType::Karatsuba { threshold: 1 }).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = ArithmeticEngineBuilder::new()
            .karatsuba_multiplication(12)
            .with_stats();
        assert_eq!(
            builder.get_config().multiply_algorithm,
            MultiplyAlgorithmType::Karatsuba { threshold: 12 }
        );

        let engine = builder.build().unwrap();
        let product = engine.mul(&BigInt::from(u64::MAX), &BigInt::from(u64::MAX));
        assert_eq!(product, BigInt::from(u64::MAX as u128 * u64::MAX as u128));
    }

    #[test]
    fn test_builder_schoolbook() {
        let engine = ArithmeticEngineBuilder::from_config(ArithmeticConfig::default())
            .schoolbook_multiplication()
            .build()
            .unwrap();
        assert_eq!(engine.multiplier_name(), "Schoolbook");
    }
}
