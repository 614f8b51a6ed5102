//! LFU Cache Engine
//!
//! Frequency-ordered cache with capacity eviction and TTL expiry.
//! `LfuStore` is the synchronous core; `LfuCacheService` wraps it for
//! concurrent use and owns the background TTL reaper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::{CacheService, CacheStats, FrequencyIndex};
use crate::tasks::{spawn_reaper_task, ReaperHandle};

// == LFU Store ==
/// Core LFU storage: value map plus frequency bookkeeping and TTL stamps.
///
/// Invariants: the same live key set across `values`, `counts` and
/// `last_touched`; every live key sits in exactly one frequency bucket,
/// numbered by its access count; never more than `capacity` live keys.
#[derive(Debug)]
pub struct LfuStore {
    /// Key-value storage
    values: HashMap<i64, String>,
    /// Key -> current access count
    counts: HashMap<i64, u64>,
    /// Access count -> keys at that count, FIFO by promotion time
    frequencies: FrequencyIndex,
    /// Key -> last access timestamp (Unix milliseconds), reaper only
    last_touched: HashMap<i64, u64>,
    /// Operational statistics
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
}

impl LfuStore {
    // == Constructor ==
    /// Creates an empty store bounded by `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            values: HashMap::new(),
            counts: HashMap::new(),
            frequencies: FrequencyIndex::new(),
            last_touched: HashMap::new(),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Put ==
    /// Stores a key-value pair. Never fails.
    ///
    /// A new key while at capacity first evicts the lowest-frequency,
    /// earliest-promoted key. An existing key is overwritten in place and
    /// promoted. The wall-clock duration of the whole operation is folded
    /// into the running write-latency average, on every path.
    ///
    /// With capacity 0 the store stays permanently empty: the entry is
    /// dropped and every later `get` misses.
    pub fn put(&mut self, key: i64, value: String) {
        let start = Instant::now();

        if self.capacity == 0 {
            self.record_put_latency(start);
            return;
        }

        if let Some(slot) = self.values.get_mut(&key) {
            *slot = value;
            self.promote(key);
        } else {
            if self.values.len() >= self.capacity {
                self.evict_lowest();
            }
            self.values.insert(key, value);
            self.counts.insert(key, 1);
            self.frequencies.insert(key);
        }
        self.touch(key);

        self.record_put_latency(start);
    }

    // == Get ==
    /// Retrieves a value by key, or None on a miss.
    ///
    /// A hit promotes the key to the next frequency bucket and refreshes
    /// its TTL stamp. A miss (absent key, or capacity 0) mutates nothing.
    pub fn get(&mut self, key: i64) -> Option<String> {
        if self.capacity == 0 || !self.values.contains_key(&key) {
            debug!("Key - {} not found", key);
            return None;
        }

        self.promote(key);
        self.touch(key);
        self.values.get(&key).cloned()
    }

    // == Remove ==
    /// Deletes a key from all four structures, returning its value.
    ///
    /// Does not touch the eviction counter; callers treating the removal
    /// as an eviction record it themselves.
    pub fn remove(&mut self, key: i64) -> Option<String> {
        if let Some(frequency) = self.counts.remove(&key) {
            self.frequencies.remove(key, frequency);
        }
        self.last_touched.remove(&key);
        self.values.remove(&key)
    }

    // == Clear ==
    /// Empties all structures and resets the statistics.
    pub fn clear(&mut self) {
        self.values.clear();
        self.counts.clear();
        self.frequencies.clear();
        self.last_touched.clear();
        self.stats.reset();
    }

    // == Reap Expired ==
    /// Removes every key idle for longer than `ttl_ms`.
    ///
    /// Each reaped entry counts as an eviction and emits the same removal
    /// record as capacity eviction. Returns the number of keys removed.
    pub fn reap_expired(&mut self, ttl_ms: u64) -> usize {
        let now = current_timestamp_ms();
        let expired: Vec<i64> = self
            .last_touched
            .iter()
            .filter(|(_, touched)| now > *touched + ttl_ms)
            .map(|(key, _)| *key)
            .collect();

        let mut removed = 0;
        for key in expired {
            if let Some(value) = self.remove(key) {
                self.stats.record_eviction();
                info!("Removing entity: key = {} value = {}", key, value);
                removed += 1;
            }
        }
        removed
    }

    // == Stats ==
    /// Running average put latency in milliseconds.
    pub fn average_write_latency_ms(&self) -> f64 {
        self.stats.average_write_latency_ms()
    }

    /// Cumulative eviction count (capacity and TTL).
    pub fn eviction_count(&self) -> u64 {
        self.stats.eviction_count()
    }

    // == Length ==
    /// Current number of resident entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the store holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // == Internals ==
    /// Moves a key to the next frequency bucket and bumps its count.
    fn promote(&mut self, key: i64) {
        if let Some(frequency) = self.counts.get_mut(&key) {
            self.frequencies.promote(key, *frequency);
            *frequency += 1;
        }
    }

    /// Evicts the lowest-frequency, earliest-promoted key.
    fn evict_lowest(&mut self) {
        if let Some(key) = self.frequencies.pop_lowest() {
            self.counts.remove(&key);
            self.last_touched.remove(&key);
            if let Some(value) = self.values.remove(&key) {
                self.stats.record_eviction();
                info!("Removing entity: key = {} value = {}", key, value);
            }
        }
    }

    /// Refreshes the key's last-access timestamp.
    fn touch(&mut self, key: i64) {
        self.last_touched.insert(key, current_timestamp_ms());
    }

    /// Folds the elapsed put duration into the running average.
    fn record_put_latency(&mut self, start: Instant) {
        self.stats.record_write(start.elapsed().as_secs_f64() * 1000.0);
    }

    /// Checks the cross-structure invariants.
    #[cfg(test)]
    pub fn assert_consistent(&self) {
        assert!(self.values.len() <= self.capacity);
        assert_eq!(self.values.len(), self.counts.len());
        assert_eq!(self.values.len(), self.last_touched.len());
        assert_eq!(self.values.len(), self.frequencies.len());
        for (key, count) in &self.counts {
            assert_eq!(self.frequencies.frequency_of(*key), Some(*count));
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == LFU Cache Service ==
/// Concurrent LFU cache: the store behind a write-serializing lock, plus
/// a TTL reaper spawned at construction and joinable on shutdown.
///
/// Must be constructed inside a Tokio runtime (the reaper is spawned
/// immediately).
pub struct LfuCacheService {
    /// Shared store; every mutating operation takes the write lock
    store: Arc<RwLock<LfuStore>>,
    /// Reaper handle, taken once by `shutdown`
    reaper: Mutex<Option<ReaperHandle>>,
}

impl LfuCacheService {
    // == Constructor ==
    /// Creates the engine and starts its TTL reaper.
    ///
    /// # Arguments
    /// * `capacity` - Maximum resident entries (0 = permanently empty)
    /// * `ttl_ms` - Idle duration after which an entry is reaped
    pub fn new(capacity: usize, ttl_ms: u64) -> Self {
        let store = Arc::new(RwLock::new(LfuStore::new(capacity)));
        let reaper = spawn_reaper_task(store.clone(), ttl_ms);
        Self {
            store,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == Shutdown ==
    /// Stops the TTL reaper: signals cancellation and joins the task.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub async fn shutdown(&self) {
        if let Some(handle) = self.reaper.lock().await.take() {
            handle.shutdown().await;
        }
    }
}

#[async_trait]
impl CacheService for LfuCacheService {
    async fn put(&self, key: i64, value: String) {
        self.store.write().await.put(key, value);
    }

    async fn get(&self, key: i64) -> Option<String> {
        // Write lock: a hit mutates frequency state and the TTL stamp
        self.store.write().await.get(key)
    }

    async fn remove(&self, key: i64) -> Option<String> {
        self.store.write().await.remove(key)
    }

    async fn clear(&self) {
        self.store.write().await.clear();
    }

    async fn average_write_latency_ms(&self) -> f64 {
        self.store.read().await.average_write_latency_ms()
    }

    async fn eviction_count(&self) -> u64 {
        self.store.read().await.eviction_count()
    }
}
