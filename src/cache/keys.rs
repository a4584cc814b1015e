//! Cache key conventions shared by data fetchers and the auth flow.

use crate::cache::{Tag, TaggedCache};

/// Key under which the current authenticated principal is cached.
pub const AUTH_USER_KEY: &str = "auth:user";

/// The principal stays cached for a day unless logout invalidates it.
pub const AUTH_USER_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Builds a deterministic key from a resource name and query parameters.
///
/// Parameters are sorted by name, then value, so callers passing the same
/// filters in a different order share one entry.
pub fn resource_key(resource: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return resource.to_string();
    }

    let mut sorted = params.to_vec();
    sorted.sort_unstable();

    let query = sorted
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{resource}?{query}")
}

/// Caches the signed-in principal under [`AUTH_USER_KEY`].
pub fn remember_principal<V: Clone>(cache: &mut TaggedCache<V>, principal: V) {
    cache.set(AUTH_USER_KEY, principal, Some(AUTH_USER_TTL_MS), [Tag::Auth]);
}

/// Drops everything derived from the session. Called on logout.
pub fn forget_session<V: Clone>(cache: &mut TaggedCache<V>) -> usize {
    cache.invalidate_by_tag(&Tag::Auth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_key_without_params() {
        assert_eq!(resource_key("tickets", &[]), "tickets");
    }

    #[test]
    fn test_resource_key_is_order_independent() {
        let a = resource_key("tickets", &[("status", "open"), ("page", "2")]);
        let b = resource_key("tickets", &[("page", "2"), ("status", "open")]);

        assert_eq!(a, b);
        assert_eq!(a, "tickets?page=2&status=open");
    }

    #[test]
    fn test_resource_key_distinguishes_resources() {
        assert_ne!(
            resource_key("users", &[("id", "1")]),
            resource_key("sectors", &[("id", "1")])
        );
    }

    #[test]
    fn test_logout_forgets_principal_only() {
        let mut cache: TaggedCache<String> = TaggedCache::new(10, 60_000);

        remember_principal(&mut cache, "ana".to_string());
        cache.set("tickets", "[]".to_string(), None, [Tag::Tickets]);

        assert!(cache.has(AUTH_USER_KEY));
        assert_eq!(cache.ttl_remaining_ms(AUTH_USER_KEY).map(|ms| ms > 60_000), Some(true));

        assert_eq!(forget_session(&mut cache), 1);
        assert!(!cache.has(AUTH_USER_KEY));
        assert!(cache.has("tickets"));
    }
}
