//! Routing Module
//!
//! Route decision cache, the policy it memoizes, and the per-request filter
//! that ties them together.

mod decision_cache;
mod filter;
mod policy;

pub use decision_cache::{
    route_key, RouteDecisionCache, RouteVerdict, ROUTE_CACHE_MAX_ENTRIES, ROUTE_DECISION_TTL_MS,
};
pub use filter::{DecisionSource, FilterDecision, RoutingFilter};
pub use policy::{is_bypass_path, RoutePolicy};
