//! API Module
//!
//! HTTP handlers, the route guard middleware and routing for the server.
//!
//! # Endpoints
//! - `PUT /api/cache` - Store a value
//! - `GET /api/cache/entries/:key` - Retrieve a value by key
//! - `DELETE /api/cache/entries/:key` - Remove a key
//! - `DELETE /api/cache/tags/:tag` - Invalidate every entry with a tag
//! - `GET /api/cache/stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod guard;
pub mod handlers;
pub mod routes;

pub use guard::{is_authenticated, route_guard, SESSION_COOKIE};
pub use handlers::*;
pub use routes::create_router;
