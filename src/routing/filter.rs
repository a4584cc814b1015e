//! Routing Filter
//!
//! Per-request consumer of the route decision cache. Each request walks:
//!
//! ```text
//! checking-static-asset ──bypass──────────────────────────► passing-through
//!        │
//!        ▼
//! checking-cache ──hit──────────────────────────► redirecting | passing-through
//!        │ miss
//!        ▼
//! evaluating-policy ──remember──────────────────► redirecting | passing-through
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::routing::{is_bypass_path, RouteDecisionCache, RoutePolicy, RouteVerdict};

/// Where a decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    /// Build artifact or API route, never cached
    Bypass,
    /// Remembered verdict
    Cache,
    /// Freshly evaluated and remembered
    Policy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDecision {
    pub verdict: RouteVerdict,
    pub source: DecisionSource,
}

impl FilterDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self.verdict, RouteVerdict::Redirect(_))
    }
}

// == Routing Filter ==
#[derive(Debug, Clone)]
pub struct RoutingFilter {
    cache: Arc<RwLock<RouteDecisionCache>>,
    policy: Arc<RoutePolicy>,
}

impl RoutingFilter {
    pub fn new(cache: RouteDecisionCache, policy: RoutePolicy) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            policy: Arc::new(policy),
        }
    }

    /// Decides what happens to a request for `path`.
    pub async fn decide(&self, path: &str, is_authenticated: bool) -> FilterDecision {
        if is_bypass_path(path) && !self.policy.governs(path) {
            trace!(path, "bypassing routing");
            return FilterDecision {
                verdict: RouteVerdict::Continue,
                source: DecisionSource::Bypass,
            };
        }

        let mut cache = self.cache.write().await;

        if let Some(verdict) = cache.lookup(path, is_authenticated) {
            trace!(path, is_authenticated, ?verdict, "route decision cache hit");
            return FilterDecision {
                verdict,
                source: DecisionSource::Cache,
            };
        }

        let verdict = self.policy.evaluate(path, is_authenticated);
        debug!(path, is_authenticated, ?verdict, "evaluated routing policy");
        cache.remember(path, is_authenticated, verdict.clone());

        FilterDecision {
            verdict,
            source: DecisionSource::Policy,
        }
    }

    /// Shared handle to the underlying cache, for sweeping and inspection.
    pub fn cache(&self) -> &Arc<RwLock<RouteDecisionCache>> {
        &self.cache
    }
}

impl Default for RoutingFilter {
    fn default() -> Self {
        Self::new(RouteDecisionCache::new(), RoutePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::routing::ROUTE_DECISION_TTL_MS;

    fn filter_with_clock() -> (RoutingFilter, ManualClock) {
        let clock = ManualClock::new(0);
        let cache = RouteDecisionCache::with_clock(Arc::new(clock.clone()));
        (RoutingFilter::new(cache, RoutePolicy::default()), clock)
    }

    #[tokio::test]
    async fn test_bypass_never_touches_cache() {
        let (filter, _) = filter_with_clock();

        let decision = filter.decide("/api/tickets", false).await;

        assert_eq!(decision.source, DecisionSource::Bypass);
        assert_eq!(decision.verdict, RouteVerdict::Continue);
        assert!(filter.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_dotted_paths_under_protected_prefix_are_guarded() {
        let (filter, _) = filter_with_clock();

        for path in ["/dashboard/users/ana.silva", "/dashboard/tickets/v1.2", "/dashboard/report.pdf"] {
            let decision = filter.decide(path, false).await;
            assert_eq!(decision.source, DecisionSource::Policy, "{path}");
            assert_eq!(decision.verdict.redirect_target(), Some("/login"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let (filter, _) = filter_with_clock();

        let first = filter.decide("/dashboard", false).await;
        assert_eq!(first.source, DecisionSource::Policy);
        assert!(first.is_redirect());
        assert_eq!(first.verdict.redirect_target(), Some("/login"));

        let second = filter.decide("/dashboard", false).await;
        assert_eq!(second.source, DecisionSource::Cache);
        assert_eq!(second.verdict, first.verdict);
    }

    #[tokio::test]
    async fn test_auth_state_has_its_own_decision() {
        let (filter, _) = filter_with_clock();

        filter.decide("/dashboard", false).await;
        let authed = filter.decide("/dashboard", true).await;

        assert_eq!(authed.source, DecisionSource::Policy);
        assert_eq!(authed.verdict, RouteVerdict::Continue);
    }

    #[tokio::test]
    async fn test_decision_is_reevaluated_after_ttl() {
        let (filter, clock) = filter_with_clock();

        filter.decide("/login", true).await;
        clock.advance(ROUTE_DECISION_TTL_MS + 1);

        let decision = filter.decide("/login", true).await;
        assert_eq!(decision.source, DecisionSource::Policy);
        assert_eq!(decision.verdict, RouteVerdict::redirect("/dashboard"));
    }
}
