//! Cache Module
//!
//! Two interchangeable cache strategies behind one contract: the LFU
//! engine (frequency-ordered eviction plus TTL reaping) and an LRU
//! variant delegating to moka.

mod frequency;
mod lfu;
mod lru;
mod service;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use frequency::FrequencyIndex;
pub use lfu::{current_timestamp_ms, LfuCacheService, LfuStore};
pub use lru::LruCacheService;
pub use service::CacheService;
pub use stats::CacheStats;

// == Public Constants ==
/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
