// ============================================================================
// Arithmetic Engine
// Dispatches operations to the configured multiplier and records stats
// ============================================================================

use super::chain::{Chain, Operation};
use super::stats::{OperationKind, OperationStats};
use crate::domain::BigInt;
use crate::interfaces::Multiplier;
use std::cmp::Ordering;
use std::time::Instant;

/// Arithmetic front-end over a pluggable [`Multiplier`].
///
/// The engine holds no mutable state besides its atomic counters, so a
/// single instance can be shared by any number of threads, each working on
/// values it owns.
pub struct ArithmeticEngine {
    multiplier: Box<dyn Multiplier>,
    stats: Option<OperationStats>,
}

impl ArithmeticEngine {
    /// Create an engine without statistics.
    pub fn new(multiplier: Box<dyn Multiplier>) -> Self {
        tracing::debug!(multiplier = multiplier.name(), "arithmetic engine created");
        Self {
            multiplier,
            stats: None,
        }
    }

    /// Create an engine that records per-operation counts and timings.
    pub fn with_stats(multiplier: Box<dyn Multiplier>) -> Self {
        tracing::debug!(
            multiplier = multiplier.name(),
            "arithmetic engine created with stats"
        );
        Self {
            multiplier,
            stats: Some(OperationStats::new()),
        }
    }

    /// Name of the configured multiplier.
    pub fn multiplier_name(&self) -> &str {
        self.multiplier.name()
    }

    /// Statistics, if enabled.
    pub fn stats(&self) -> Option<&OperationStats> {
        self.stats.as_ref()
    }

    #[inline]
    fn timed<T>(&self, kind: OperationKind, op: impl FnOnce() -> T) -> T {
        match &self.stats {
            None => op(),
            Some(stats) => {
                let start = Instant::now();
                let out = op();
                stats.record(kind, start.elapsed());
                out
            },
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// `a + b`. Consumes `a` and accumulates into its buffer.
    pub fn add(&self, a: BigInt, b: &BigInt) -> BigInt {
        self.timed(OperationKind::Add, || a + b)
    }

    /// `a - b`. Consumes `a` and accumulates into its buffer.
    pub fn sub(&self, a: BigInt, b: &BigInt) -> BigInt {
        self.timed(OperationKind::Subtract, || a - b)
    }

    /// `a * b` through the configured multiplier.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.timed(OperationKind::Multiply, || self.multiplier.multiply(a, b))
    }

    /// Order `|a|` against `|b|`.
    pub fn compare_magnitudes(&self, a: &BigInt, b: &BigInt) -> Ordering {
        self.timed(OperationKind::Compare, || BigInt::compare_magnitudes(a, b))
    }

    // ========================================================================
    // Chains
    // ========================================================================

    /// Run a fold chain to completion and return the final value.
    pub fn run_chain(&self, chain: &Chain) -> BigInt {
        tracing::debug!(
            operation = ?chain.operation,
            iterations = chain.iterations,
            seed_limbs = chain.seed.limb_len(),
            operand_limbs = chain.operand.limb_len(),
            "chain started"
        );

        let mut acc = chain.seed.clone();
        for _ in 0..chain.iterations {
            acc = match chain.operation {
                Operation::Add => self.add(acc, &chain.operand),
                Operation::Sub => self.sub(acc, &chain.operand),
                Operation::Mul => self.mul(&acc, &chain.operand),
            };
        }

        tracing::debug!(
            operation = ?chain.operation,
            result_limbs = acc.limb_len(),
            "chain finished"
        );
        acc
    }

    /// Run independent chains on scoped threads, one thread per chain.
    ///
    /// Results come back in input order. Each chain owns its running value,
    /// nothing is shared except the engine itself. A panic in any chain is
    /// re-raised on the caller's thread.
    pub fn run_chains_parallel(&self, chains: &[Chain]) -> Vec<BigInt> {
        let outcome = crossbeam::scope(|scope| {
            let handles: Vec<_> = chains
                .iter()
                .map(|chain| scope.spawn(move |_| self.run_chain(chain)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect::<Vec<_>>()
        });

        outcome.unwrap_or_else(|payload| std::panic::resume_unwind(payload))
    }
}

impl std::fmt::Debug for ArithmeticEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArithmeticEngine")
            .field("multiplier", &self.multiplier.name())
            .field("stats", &self.stats.is_some())
            .finish()
    }
}
