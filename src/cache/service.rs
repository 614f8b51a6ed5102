//! Cache Service Contract
//!
//! The abstract contract every eviction strategy implements. Callers hold
//! an `Arc<dyn CacheService>` and stay agnostic to the strategy behind it.

use async_trait::async_trait;

// == Cache Service Trait ==
/// Common contract for all cache strategies.
///
/// Lookups that find nothing are a normal sentinel result (`None`),
/// never a failure; `put` always succeeds.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Stores a value under the key, overwriting any previous value.
    ///
    /// May evict one entry if the cache is at capacity.
    async fn put(&self, key: i64, value: String);

    /// Returns the value for the key, or None on a miss.
    async fn get(&self, key: i64) -> Option<String>;

    /// Removes the key, returning its value if it was present.
    async fn remove(&self, key: i64) -> Option<String>;

    /// Empties the cache and resets its statistics.
    async fn clear(&self);

    /// Running average put latency in milliseconds.
    async fn average_write_latency_ms(&self) -> f64;

    /// Cumulative number of evicted entries (capacity or TTL).
    async fn eviction_count(&self) -> u64;
}
