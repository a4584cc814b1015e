//! Tagcache - in-process caching for a request-handling service
//!
//! Provides a tagged TTL cache with FIFO eviction and hit/miss accounting,
//! plus a short-lived route decision cache consulted by the routing filter.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod routing;
pub mod tasks;

pub use api::AppState;
pub use cache::{Tag, TaggedCache};
pub use config::Config;
pub use routing::{RouteDecisionCache, RouteVerdict, RoutingFilter};
pub use tasks::spawn_sweep_task;
