// ============================================================================
// Bignum Engine Library
// Arbitrary-precision signed integer arithmetic with pluggable multiplication
// ============================================================================

//! # Bignum Engine
//!
//! Arbitrary-precision signed integers stored as little-endian 64-bit limbs.
//!
//! ## Features
//!
//! - **Value-semantic `BigInt`** with every owned/borrowed operator combination
//! - **Pluggable multiplication** (schoolbook, Karatsuba) behind one trait
//! - **Radix 2..=36 codec** with chunked parsing and formatting
//! - **Instrumented engine** with per-operation counts and timings
//! - **Parallel chains** on scoped threads, one owned value per chain
//!
//! ## Example
//!
//! ```rust
//! use bignum_engine::prelude::*;
//!
//! let engine = ArithmeticEngineBuilder::new()
//!     .karatsuba_multiplication(16)
//!     .with_stats()
//!     .build()
//!     .unwrap();
//!
//! let seed: BigInt = "9812029183092109833851794719827489214120981798579728720418092047123721837128371298739812"
//!     .parse()
//!     .unwrap();
//! let factor: BigInt = "-1000000000000000000000".parse().unwrap();
//!
//! let chain = Chain::new(Operation::Mul, seed, factor, 3);
//! let result = engine.run_chain(&chain);
//! assert!(result.is_negative());
//! assert!(result.to_string().ends_with(&"0".repeat(63)));
//!
//! let stats = engine.stats().unwrap().snapshot();
//! assert_eq!(stats.get(OperationKind::Multiply).count, 3);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ArithmeticConfig, BigInt, MultiplyAlgorithmType, Sign};
    pub use crate::engine::{
        create_from_config, ArithmeticEngine, ArithmeticEngineBuilder, Chain,
        KaratsubaMultiplier, Operation, OperationKind, OperationStats, SchoolbookMultiplier,
    };
    pub use crate::interfaces::Multiplier;
    pub use crate::numeric::{NumericError, ParseBigIntError, ParseErrorKind};
}
