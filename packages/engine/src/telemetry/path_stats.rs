//! Path compilation statistics with cache-padded atomic counters

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

/// Thread-safe counters for path compilation and cache activity
#[derive(Debug, Default)]
pub struct PathStats {
    /// Number of expressions compiled
    pub compiled: CachePadded<AtomicUsize>,
    /// Number of compile requests answered from the cache
    pub cache_hits: CachePadded<AtomicUsize>,
    /// Number of compile requests that missed the cache
    pub cache_misses: CachePadded<AtomicUsize>,
    /// Number of expressions rejected by the parser
    pub parse_failures: CachePadded<AtomicUsize>,
}

/// Immutable snapshot of path statistics at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathStatsSnapshot {
    pub compiled: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub parse_failures: usize,
}

impl PathStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_compiled(&self) {
        self.compiled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_parse_failure(&self) {
        self.parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> PathStatsSnapshot {
        PathStatsSnapshot {
            compiled: self.compiled.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            parse_failures: self.parse_failures.load(Ordering::Relaxed),
        }
    }

    /// Fraction of lookups served from the cache, 0.0 when nothing was looked up
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        let snapshot = self.snapshot();
        let total = snapshot.cache_hits + snapshot.cache_misses;
        if total == 0 {
            return 0.0;
        }
        snapshot.cache_hits as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_events() {
        let stats = PathStats::new();
        stats.record_miss();
        stats.record_compiled();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.compiled, 1);
        assert_eq!(snapshot.cache_hits, 3);
        assert_eq!(snapshot.cache_misses, 1);
        assert!((stats.hit_ratio() - 0.75).abs() < f64::EPSILON);
    }
}
