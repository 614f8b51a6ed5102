//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Every handler
//! resolves the strategy path segment to one of the registered
//! `CacheService` implementations and stays agnostic to which one it got.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CacheService, LfuCacheService, LruCacheService};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds one strategy instance per name; both satisfy the same contract.
#[derive(Clone)]
pub struct AppState {
    /// Frequency-ordered engine with its own TTL reaper
    pub lfu: Arc<dyn CacheService>,
    /// Library-delegating LRU variant
    pub lru: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates a new AppState from two strategy instances.
    pub fn new(lfu: Arc<dyn CacheService>, lru: Arc<dyn CacheService>) -> Self {
        Self { lfu, lru }
    }

    /// Builds both strategies from configuration.
    ///
    /// Also returns the concrete LFU service so the caller can join its
    /// reaper on shutdown. Must run inside a Tokio runtime.
    pub fn from_config(config: &Config) -> (Self, Arc<LfuCacheService>) {
        let lfu = Arc::new(LfuCacheService::new(config.lfu_capacity, config.lfu_ttl_ms));
        let lru = Arc::new(LruCacheService::new(config.lru_capacity, config.lru_ttl_ms));
        (Self::new(lfu.clone(), lru), lfu)
    }

    /// Resolves a strategy path segment to its cache service.
    pub fn strategy(&self, name: &str) -> Result<&Arc<dyn CacheService>> {
        match name {
            "lfu" => Ok(&self.lfu),
            "lru" => Ok(&self.lru),
            other => Err(CacheError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Handler for PUT /caches/:strategy
///
/// Stores a key-value pair in the selected cache. Never fails for a
/// valid request; a full cache evicts one entry instead.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let cache = state.strategy(&strategy)?;
    cache.put(req.key, req.value).await;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /caches/:strategy/:key
///
/// Retrieves a value from the selected cache. A miss maps to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path((strategy, key)): Path<(String, i64)>,
) -> Result<Json<GetResponse>> {
    let cache = state.strategy(&strategy)?;
    let value = cache.get(key).await.ok_or(CacheError::NotFound(key))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /caches/:strategy/:key
///
/// Removes a key from the selected cache.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((strategy, key)): Path<(String, i64)>,
) -> Result<Json<DeleteResponse>> {
    let cache = state.strategy(&strategy)?;
    let value = cache.remove(key).await.ok_or(CacheError::NotFound(key))?;

    Ok(Json(DeleteResponse::new(key, value)))
}

/// Handler for POST /caches/:strategy/clear
///
/// Empties the selected cache and resets its statistics.
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
) -> Result<Json<ClearResponse>> {
    let cache = state.strategy(&strategy)?;
    cache.clear().await;

    Ok(Json(ClearResponse::new(strategy)))
}

/// Handler for GET /caches/:strategy/stats
///
/// Returns the selected cache's statistics snapshot.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
) -> Result<Json<StatsResponse>> {
    let cache = state.strategy(&strategy)?;
    let average = cache.average_write_latency_ms().await;
    let evictions = cache.eviction_count().await;

    Ok(Json(StatsResponse::new(average, evictions)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
