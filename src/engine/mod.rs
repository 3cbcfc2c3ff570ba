// ============================================================================
// Engine Module
// Multiplication strategies, the arithmetic engine and its instrumentation
// ============================================================================

mod arithmetic_engine;
mod chain;
mod karatsuba;
mod schoolbook;
mod stats;

pub mod factory;

pub use arithmetic_engine::ArithmeticEngine;
pub use chain::{Chain, Operation};
pub use factory::{create_from_config, create_multiplier, ArithmeticEngineBuilder};
pub use karatsuba::KaratsubaMultiplier;
pub use schoolbook::SchoolbookMultiplier;
pub use stats::{OperationKind, OperationStats, OperationTotals, StatsSnapshot};
