//! API Handlers
//!
//! HTTP request handlers for the cache endpoints and the page fallback.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::Uri,
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{SharedCache, Tag, TaggedCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, ExistsResponse, GetResponse, HealthResponse, InvalidateResponse,
    RemoveResponse, SetRequest, SetResponse, StatsResponse,
};
use crate::routing::{RouteDecisionCache, RoutePolicy, RoutingFilter};

/// Application state shared across all handlers.
///
/// Built once at startup and handed to every consumer; there is no global
/// cache instance.
#[derive(Clone)]
pub struct AppState {
    /// Tagged TTL cache holding JSON payloads
    pub cache: SharedCache<Value>,
    /// Routing filter with its own decision cache
    pub routing: RoutingFilter,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: TaggedCache<Value>, routing: RoutingFilter) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            routing,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = TaggedCache::new(config.max_entries, config.default_ttl_ms);
        let routing = RoutingFilter::new(RouteDecisionCache::new(), RoutePolicy::default());
        Self::new(cache, routing)
    }
}

/// Handler for PUT /api/cache
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<Json<SetResponse>> {
    let Json(req) = payload?;

    let mut cache = state.cache.write().await;
    let ttl_ms = req.ttl_ms.unwrap_or(cache.default_ttl_ms());
    cache.set(req.key.clone(), req.value, Some(ttl_ms), req.tags);

    Ok(Json(SetResponse::new(req.key, ttl_ms)))
}

/// Handler for GET /api/cache/entries/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: a read updates counters and may drop an expired entry
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .ok_or_else(|| ApiError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /api/cache/entries/:key/exists
pub async fn exists_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<ExistsResponse> {
    let cache = state.cache.read().await;
    let exists = cache.has(&key);

    Json(ExistsResponse { key, exists })
}

/// Handler for DELETE /api/cache/entries/:key
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<RemoveResponse> {
    let removed = state.cache.write().await.remove(&key);

    Json(RemoveResponse { key, removed })
}

/// Handler for DELETE /api/cache/tags/:tag
pub async fn invalidate_tag_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Json<InvalidateResponse> {
    let tag = Tag::from(tag);
    let removed = state.cache.write().await.invalidate_by_tag(&tag);

    Json(InvalidateResponse { tag, removed })
}

/// Handler for DELETE /api/cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.write().await.clear();
    info!("cache cleared via API");

    Json(ClearResponse::cleared())
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let (stats, capacity) = {
        let cache = state.cache.read().await;
        (cache.stats(), cache.capacity())
    };
    let route_decisions = state.routing.cache().read().await.len();

    Json(StatsResponse::new(stats, capacity, route_decisions))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for every other path.
///
/// Page rendering lives elsewhere; reaching this handler means the routing
/// filter let the request through.
pub async fn page_handler(uri: Uri) -> Result<String> {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return Err(ApiError::NotFound(path.to_string()));
    }

    Ok(format!("page: {path}"))
}
