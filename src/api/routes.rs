//! API Routes
//!
//! Configures the Axum router with the cache endpoints and the route guard.

use axum::{
    middleware,
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::guard::route_guard;
use super::handlers::{
    clear_handler, exists_handler, get_handler, health_handler, invalidate_tag_handler,
    page_handler, remove_handler, set_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /api/cache` - Store a value with optional TTL and tags
/// - `DELETE /api/cache` - Clear the cache and its counters
/// - `GET /api/cache/stats` - Cache statistics
/// - `GET /api/cache/entries/:key` - Retrieve a value
/// - `GET /api/cache/entries/:key/exists` - Existence check
/// - `DELETE /api/cache/entries/:key` - Remove a value
/// - `DELETE /api/cache/tags/:tag` - Invalidate by tag
/// - `GET /health` - Health check endpoint
/// - anything else - page fallback
///
/// # Middleware
/// - Route guard: redirects according to the routing policy
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/cache", put(set_handler).delete(clear_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route(
            "/api/cache/entries/:key",
            get(get_handler).delete(remove_handler),
        )
        .route("/api/cache/entries/:key/exists", get(exists_handler))
        .route("/api/cache/tags/:tag", delete(invalidate_tag_handler))
        .route("/health", get(health_handler))
        .fallback(page_handler)
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TaggedCache;
    use crate::routing::RoutingFilter;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(TaggedCache::new(100, 300_000), RoutingFilter::default());
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_set_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/cache")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"key":"test","value":"hello","tags":["users"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cache/entries/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_protected_page_redirects_anonymous() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_protected_page_passes_with_session() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .header(header::COOKIE, "auth-token=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
