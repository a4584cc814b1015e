//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::Tag;

/// Request body for the SET operation (PUT /api/cache)
///
/// # Fields
/// - `key`: The cache key; any string, including the empty one
/// - `value`: Arbitrary JSON payload
/// - `ttl_ms`: Optional TTL in milliseconds (uses default if not specified)
/// - `tags`: Invalidation labels
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub ttl_ms: Option<i64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}
