//! Route Decision Cache
//!
//! Memoizes routing verdicts per (path, authentication state) for a short,
//! fixed window.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::{Clock, SystemClock};

/// How long a remembered verdict stays valid (30 seconds).
pub const ROUTE_DECISION_TTL_MS: i64 = 30_000;

/// Upper bound on remembered verdicts.
pub const ROUTE_CACHE_MAX_ENTRIES: usize = 10_000;

// == Route Verdict ==
/// Outcome of routing policy evaluation for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteVerdict {
    /// Let the request reach its handler
    Continue,
    /// Send the client to this path instead
    Redirect(String),
}

impl RouteVerdict {
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect(target.into())
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Continue => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

#[derive(Debug, Clone)]
struct RouteCacheEntry {
    verdict: RouteVerdict,
    inserted_at: i64,
}

impl RouteCacheEntry {
    fn is_expired(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.inserted_at) > ROUTE_DECISION_TTL_MS
    }
}

/// Serializes the composite key. The trailing `:true`/`:false` keeps keys
/// unambiguous even when the path itself contains colons.
pub fn route_key(path: &str, is_authenticated: bool) -> String {
    format!("{path}:{is_authenticated}")
}

// == Route Decision Cache ==
#[derive(Debug)]
pub struct RouteDecisionCache {
    entries: HashMap<String, RouteCacheEntry>,
    max_entries: usize,
    clock: Arc<dyn Clock>,
}

impl Default for RouteDecisionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteDecisionCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: ROUTE_CACHE_MAX_ENTRIES,
            clock,
        }
    }

    // == Lookup ==
    /// Returns the remembered verdict if it is younger than the fixed TTL.
    ///
    /// A stale entry is dropped on the way out.
    pub fn lookup(&mut self, path: &str, is_authenticated: bool) -> Option<RouteVerdict> {
        let key = route_key(path, is_authenticated);
        let now = self.clock.now_ms();

        let cached = self
            .entries
            .get(&key)
            .map(|entry| (!entry.is_expired(now)).then(|| entry.verdict.clone()));

        match cached {
            Some(Some(verdict)) => Some(verdict),
            Some(None) => {
                self.entries.remove(&key);
                trace!(key = %key, "route decision expired");
                None
            }
            None => None,
        }
    }

    // == Remember ==
    /// Stores a verdict, overwriting whatever was remembered for the key.
    pub fn remember(&mut self, path: &str, is_authenticated: bool, verdict: RouteVerdict) {
        let key = route_key(path, is_authenticated);

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.make_room();
        }

        let entry = RouteCacheEntry {
            verdict,
            inserted_at: self.clock.now_ms(),
        };
        self.entries.insert(key, entry);
    }

    /// Drops every verdict past its TTL. Returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn make_room(&mut self) {
        let purged = self.purge_expired();
        if purged > 0 {
            debug!(purged, "route cache full, purged expired decisions");
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!(key = %key, "route cache full, dropped oldest decision");
        }
    }

    #[cfg(test)]
    fn with_capacity(clock: Arc<dyn Clock>, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries,
            clock,
        }
    }
}
