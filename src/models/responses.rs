//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the GET operation (GET /caches/:strategy/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: i64,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: i64, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Response body for the SET operation (PUT /caches/:strategy)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: i64,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: i64) -> Self {
        Self {
            message: format!("Key {} set successfully", key),
            key,
        }
    }
}

/// Response body for the DELETE operation (DELETE /caches/:strategy/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: i64,
    /// The value the key held
    pub value: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: i64, value: impl Into<String>) -> Self {
        Self {
            message: format!("Key {} deleted successfully", key),
            key,
            value: value.into(),
        }
    }
}

/// Response body for the clear operation (POST /caches/:strategy/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse for the named strategy
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            message: format!("Cache '{}' cleared", strategy.into()),
        }
    }
}

/// Response body for the stats endpoint (GET /caches/:strategy/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Running average put latency in milliseconds
    pub average_write_latency_ms: f64,
    /// Cumulative number of evicted entries
    pub evictions: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse
    pub fn new(average_write_latency_ms: f64, evictions: u64) -> Self {
        Self {
            average_write_latency_ms,
            evictions,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    #[allow(dead_code)]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new(7, "test_value");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("7"));
        assert!(json.contains("test_value"));
    }

    #[test]
    fn test_set_response_serialize() {
        let resp = SetResponse::new(42);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("42"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new(9, "old");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("deleted"));
        assert!(json.contains("old"));
    }

    #[test]
    fn test_clear_response_serialize() {
        let resp = ClearResponse::new("lfu");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("lfu"));
        assert!(json.contains("cleared"));
    }

    #[test]
    fn test_stats_response_serialize() {
        let resp = StatsResponse::new(1.5, 3);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("average_write_latency_ms"));
        assert!(json.contains("evictions"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
