//! Solver statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one solver query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions expanded (cache misses that were fully evaluated).
    pub evaluations: u64,

    /// Lookups answered from the memo table.
    pub cache_hits: u64,

    /// Deepest ply reached below the queried position.
    pub max_depth: u32,

    /// Total time spent in the query (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of lookups answered by the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.evaluations + self.cache_hits;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    /// Calculate evaluations per second.
    #[must_use]
    pub fn evaluations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.evaluations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.evaluations, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = SearchStats {
            evaluations: 30,
            cache_hits: 10,
            ..SearchStats::default()
        };
        assert_eq!(stats.hit_rate(), 0.25);
    }

    #[test]
    fn test_evaluations_per_second() {
        let mut stats = SearchStats::new();
        stats.evaluations = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.evaluations_per_second(), 1000.0);

        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
