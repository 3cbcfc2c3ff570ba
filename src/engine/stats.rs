// ============================================================================
// Operation Statistics
// Per-operation execution counts and accumulated wall time
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Arithmetic operation tracked by [`OperationStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Multiply,
    Add,
    Subtract,
    Compare,
}

impl OperationKind {
    /// Every tracked kind, in report order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Multiply,
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Compare,
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            OperationKind::Multiply => 0,
            OperationKind::Add => 1,
            OperationKind::Subtract => 2,
            OperationKind::Compare => 3,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Multiply => write!(f, "multiply"),
            OperationKind::Add => write!(f, "add"),
            OperationKind::Subtract => write!(f, "subtract"),
            OperationKind::Compare => write!(f, "compare"),
        }
    }
}

/// Totals for one operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationTotals {
    pub count: u64,
    pub elapsed: Duration,
}

/// Point-in-time copy of [`OperationStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    totals: [OperationTotals; 4],
}

impl StatsSnapshot {
    /// Totals for `kind`.
    #[inline]
    pub fn get(&self, kind: OperationKind) -> OperationTotals {
        self.totals[kind.index()]
    }

    /// Operations recorded across all kinds.
    pub fn total_count(&self) -> u64 {
        self.totals.iter().map(|t| t.count).sum()
    }
}

/// Lock-free counters shared by every thread using one engine.
///
/// Relaxed ordering is enough: counters are independent and only read for
/// reporting.
#[derive(Debug, Default)]
pub struct OperationStats {
    counts: [AtomicU64; 4],
    nanos: [AtomicU64; 4],
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one execution of `kind` taking `elapsed`.
    #[inline]
    pub fn record(&self, kind: OperationKind, elapsed: Duration) {
        let i = kind.index();
        self.counts[i].fetch_add(1, Ordering::Relaxed);
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.nanos[i].fetch_add(nanos, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let mut snapshot = StatsSnapshot::default();
        for kind in OperationKind::ALL {
            let i = kind.index();
            snapshot.totals[i] = OperationTotals {
                count: self.counts[i].load(Ordering::Relaxed),
                elapsed: Duration::from_nanos(self.nanos[i].load(Ordering::Relaxed)),
            };
        }
        snapshot
    }

    pub fn reset(&self) {
        for i in 0..OperationKind::ALL.len() {
            self.counts[i].store(0, Ordering::Relaxed);
            self.nanos[i].store(0, Ordering::Relaxed);
        }
    }

    /// Emit one `info` event per operation kind.
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        for kind in OperationKind::ALL {
            let totals = snapshot.get(kind);
            tracing::info!(
                operation = %kind,
                count = totals.count,
                elapsed_ms = totals.elapsed.as_secs_f64() * 1000.0,
                "arithmetic operation totals"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_record_and_snapshot() {
        let stats = OperationStats::new();
        stats.record(OperationKind::Multiply, Duration::from_micros(3));
        stats.record(OperationKind::Multiply, Duration::from_micros(2));
        stats.record(OperationKind::Add, Duration::from_nanos(10));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.get(OperationKind::Multiply).count, 2);
        assert_eq!(
            snapshot.get(OperationKind::Multiply).elapsed,
            Duration::from_micros(5)
        );
        assert_eq!(snapshot.get(OperationKind::Add).count, 1);
        assert_eq!(snapshot.get(OperationKind::Compare).count, 0);
        assert_eq!(snapshot.total_count(), 3);
    }

    #[test]
    fn test_reset() {
        let stats = OperationStats::new();
        stats.record(OperationKind::Subtract, Duration::from_millis(1));
        stats.reset();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_concurrent_recording() {
        let stats = Arc::new(OperationStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record(OperationKind::Compare, Duration::from_nanos(1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.snapshot().get(OperationKind::Compare).count, 4000);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(OperationKind::Multiply.to_string(), "multiply");
        assert_eq!(OperationKind::Compare.to_string(), "compare");
    }
}
