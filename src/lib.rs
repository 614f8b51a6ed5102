//! Freqcache - An in-memory cache server
//!
//! Provides a keyed cache of string values behind two interchangeable
//! eviction strategies: a frequency-ordered (LFU) engine with TTL
//! reaping, and an LRU variant delegating to moka.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheService, LfuCacheService, LruCacheService};
pub use config::Config;
pub use tasks::spawn_reaper_task;
