//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::MAX_VALUE_SIZE;

/// Request body for the SET operation (PUT /caches/:strategy)
///
/// # Fields
/// - `key`: Integer cache key to store the value under
/// - `value`: The value to store
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: i64,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// The key needs no checks; it arrives as an already-typed integer.
    pub fn validate(&self) -> Option<String> {
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": 7, "value": "hello"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, 7);
        assert_eq!(req.value, "hello");
    }

    #[test]
    fn test_set_request_negative_key() {
        let json = r#"{"key": -3, "value": "neg"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, -3);
    }

    #[test]
    fn test_validate_value_too_large() {
        let req = SetRequest {
            key: 1,
            value: "x".repeat(MAX_VALUE_SIZE + 1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = SetRequest {
            key: 1,
            value: "test".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
