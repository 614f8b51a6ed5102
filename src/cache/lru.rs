//! LRU Cache Service
//!
//! Thin adapter over `moka`: capacity-bounded, idle-expiring cache with
//! the library's own LRU-flavored eviction. Exists as the second strategy
//! behind the [`CacheService`](crate::cache::CacheService) contract; all
//! the interesting eviction machinery lives in the library.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::sync::Cache;
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::CacheService;

// == LRU Cache Service ==
/// Cache strategy delegating storage, eviction and idle expiry to moka.
pub struct LruCacheService {
    /// Backing cache; moka handles capacity and time-to-idle internally
    cache: Cache<i64, String>,
    /// Entries removed by the library for size or expiry reasons
    evictions: Arc<AtomicU64>,
    /// Running average put latency, same recurrence as the LFU engine
    avg_write_latency_ms: Mutex<f64>,
    /// Kept for the capacity-0 degenerate case (permanent miss)
    capacity: usize,
}

impl LruCacheService {
    // == Constructor ==
    /// Builds the backing moka cache with a capacity bound and idle TTL.
    ///
    /// The eviction listener emits one removal record per evicted entry
    /// and counts size/expiry removals; explicit removals and overwrites
    /// are not evictions.
    pub fn new(capacity: usize, ttl_ms: u64) -> Self {
        let evictions = Arc::new(AtomicU64::new(0));
        let listener_evictions = evictions.clone();

        let cache = Cache::builder()
            .max_capacity(capacity as u64)
            .time_to_idle(Duration::from_millis(ttl_ms.max(1)))
            .eviction_listener(move |key: Arc<i64>, value: String, cause| {
                if cause.was_evicted() {
                    listener_evictions.fetch_add(1, Ordering::Relaxed);
                    info!("Removing entity: key = {} value = {}", key, value);
                }
            })
            .build();

        Self {
            cache,
            evictions,
            avg_write_latency_ms: Mutex::new(0.0),
            capacity,
        }
    }
}

#[async_trait]
impl CacheService for LruCacheService {
    async fn put(&self, key: i64, value: String) {
        let start = Instant::now();
        if self.capacity > 0 {
            self.cache.insert(key, value);
        }
        let sample_ms = start.elapsed().as_secs_f64() * 1000.0;
        let mut avg = self.avg_write_latency_ms.lock().await;
        *avg = (*avg + sample_ms) / 2.0;
    }

    async fn get(&self, key: i64) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }
        self.cache.get(&key)
    }

    async fn remove(&self, key: i64) -> Option<String> {
        self.cache.remove(&key)
    }

    async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
        self.evictions.store(0, Ordering::Relaxed);
        *self.avg_write_latency_ms.lock().await = 0.0;
    }

    async fn average_write_latency_ms(&self) -> f64 {
        *self.avg_write_latency_ms.lock().await
    }

    async fn eviction_count(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }
}
