//! Cache Statistics Module
//!
//! Tracks operational metrics: running average write latency and evictions.

// == Cache Stats ==
/// Operational statistics for a cache engine.
///
/// The average write latency uses the recurrence
/// `(previous_average + new_sample) / 2`, seeded at 0. This weights
/// recent samples exponentially more than old ones; it is the contract
/// observed by callers, not a true arithmetic mean.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Running average of put-operation latency in milliseconds
    avg_write_latency_ms: f64,
    /// Number of entries evicted (capacity or TTL)
    evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Write ==
    /// Folds one put-latency sample (milliseconds) into the running average.
    pub fn record_write(&mut self, sample_ms: f64) {
        self.avg_write_latency_ms = (self.avg_write_latency_ms + sample_ms) / 2.0;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Accessors ==
    /// Current running average write latency in milliseconds.
    pub fn average_write_latency_ms(&self) -> f64 {
        self.avg_write_latency_ms
    }

    /// Cumulative eviction count.
    pub fn eviction_count(&self) -> u64 {
        self.evictions
    }

    // == Reset ==
    /// Resets both statistics to their initial values.
    pub fn reset(&mut self) {
        self.avg_write_latency_ms = 0.0;
        self.evictions = 0;
    }
}
