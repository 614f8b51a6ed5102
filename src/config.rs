//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// Capacity and TTL are fixed per strategy at construction; they cannot
/// change for a running cache instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum resident entries in the LFU cache (0 = permanently empty)
    pub lfu_capacity: usize,
    /// Idle duration in milliseconds before an LFU entry is reaped
    pub lfu_ttl_ms: u64,
    /// Maximum resident entries in the LRU cache
    pub lru_capacity: usize,
    /// Idle duration in milliseconds before an LRU entry expires
    pub lru_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LFU_CAPACITY` - LFU max entries (default: 1000)
    /// - `LFU_TTL_MS` - LFU idle TTL in milliseconds (default: 60000)
    /// - `LRU_CAPACITY` - LRU max entries (default: 1000)
    /// - `LRU_TTL_MS` - LRU idle TTL in milliseconds (default: 60000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            lfu_capacity: env::var("LFU_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            lfu_ttl_ms: env::var("LFU_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            lru_capacity: env::var("LRU_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            lru_ttl_ms: env::var("LRU_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lfu_capacity: 1000,
            lfu_ttl_ms: 60_000,
            lru_capacity: 1000,
            lru_ttl_ms: 60_000,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.lfu_capacity, 1000);
        assert_eq!(config.lfu_ttl_ms, 60_000);
        assert_eq!(config.lru_capacity, 1000);
        assert_eq!(config.lru_ttl_ms, 60_000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("LFU_CAPACITY");
        env::remove_var("LFU_TTL_MS");
        env::remove_var("LRU_CAPACITY");
        env::remove_var("LRU_TTL_MS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.lfu_capacity, 1000);
        assert_eq!(config.lfu_ttl_ms, 60_000);
        assert_eq!(config.server_port, 3000);
    }
}
