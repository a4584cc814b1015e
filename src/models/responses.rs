//! Response DTOs for the cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, Tag};

/// Response body for GET /api/cache/entries/{key}
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for PUT /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    pub key: String,
    /// TTL actually applied, after defaulting
    pub ttl_ms: i64,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, ttl_ms: i64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            ttl_ms,
        }
    }
}

/// Response body for GET /api/cache/entries/{key}/exists
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    pub key: String,
    pub exists: bool,
}

/// Response body for DELETE /api/cache/entries/{key}
///
/// Removing an absent key is not an error; `removed` is simply false.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub key: String,
    pub removed: bool,
}

/// Response body for DELETE /api/cache/tags/{tag}
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub tag: Tag,
    pub removed: usize,
}

/// Response body for DELETE /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// Response body for GET /api/cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Remembered routing verdicts
    pub route_decisions: usize,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, capacity: usize, route_decisions: usize) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            stats,
            capacity,
            hit_rate,
            route_decisions,
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
    fn test_set_response_serialize() {
        let resp = SetResponse::new("my_key", 1_000);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["key"], "my_key");
        assert_eq!(json["ttl_ms"], 1_000);
        assert!(json["message"].as_str().unwrap().contains("successfully"));
    }

    #[test]
    fn test_stats_response_is_flat() {
        let stats = CacheStats {
            size: 3,
            hits: 8,
            misses: 2,
            evictions: 1,
            expirations: 0,
        };
        let json = serde_json::to_value(StatsResponse::new(stats, 100, 4)).unwrap();

        assert_eq!(json["size"], 3);
        assert_eq!(json["hits"], 8);
        assert_eq!(json["capacity"], 100);
        assert_eq!(json["route_decisions"], 4);
        assert!((json["hit_rate"].as_f64().unwrap() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_invalidate_response_serializes_tag_text() {
        let resp = InvalidateResponse {
            tag: Tag::Tickets,
            removed: 2,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"tag":"tickets","removed":2}"#);
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
        let json = serde_json::to_string(&ErrorResponse::new("Something went wrong")).unwrap();
        assert_eq!(json, r#"{"error":"Something went wrong"}"#);
    }
}
