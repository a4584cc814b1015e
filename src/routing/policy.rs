//! Routing Policy
//!
//! Pure rules deciding whether a request may proceed or must be redirected.

use crate::routing::RouteVerdict;

/// Prefixes of requests that skip routing entirely: build artifacts,
/// static files and API routes.
const BYPASS_PREFIXES: [&str; 3] = ["/_next/", "/static/", "/api/"];

/// File extensions served as static assets from anywhere in the tree.
const ASSET_EXTENSIONS: [&str; 20] = [
    "js", "mjs", "css", "map", "json", "txt", "xml", "webmanifest", "ico", "png", "jpg",
    "jpeg", "gif", "svg", "webp", "avif", "woff", "woff2", "ttf", "pdf",
];

/// Returns true for requests that never touch the route cache or policy.
///
/// This only looks at the path's shape. `RoutingFilter` additionally refuses
/// to bypass anything the policy governs, so `/dashboard/report.pdf` is still
/// guarded.
pub fn is_bypass_path(path: &str) -> bool {
    if path == "/api" || path == "/favicon.ico" {
        return true;
    }
    if BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return true;
    }

    // Known asset files ("/logo.svg", "/docs/guide.pdf"); "/users/ana.silva" is a page
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.starts_with('.'))
        .and_then(|segment| segment.rsplit_once('.'))
        .is_some_and(|(_, ext)| {
            ASSET_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Segment-aware prefix match: `/dashboard` covers `/dashboard/tickets`
/// but not `/dashboards`.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

// == Route Policy ==
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Areas that require an authenticated session
    pub protected_prefixes: Vec<String>,
    /// Pages that only make sense for anonymous visitors
    pub guest_only: Vec<String>,
    /// Where anonymous visitors are sent
    pub login_path: String,
    /// Where authenticated users are sent away from guest-only pages
    pub home_path: String,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/dashboard".to_string()],
            guest_only: vec!["/login".to_string()],
            login_path: "/login".to_string(),
            home_path: "/dashboard".to_string(),
        }
    }
}

impl RoutePolicy {
    /// True when `path` falls under a protected prefix or a guest-only page.
    pub fn governs(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .chain(self.guest_only.iter())
            .any(|prefix| matches_prefix(path, prefix))
    }

    /// Evaluates the verdict for `path` given the authentication fact.
    pub fn evaluate(&self, path: &str, is_authenticated: bool) -> RouteVerdict {
        let protected = self
            .protected_prefixes
            .iter()
            .any(|prefix| matches_prefix(path, prefix));

        if protected && !is_authenticated {
            return RouteVerdict::Redirect(self.login_path.clone());
        }

        let guest_only = self
            .guest_only
            .iter()
            .any(|page| matches_prefix(path, page));

        if guest_only && is_authenticated {
            return RouteVerdict::Redirect(self.home_path.clone());
        }

        RouteVerdict::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bypass_paths() {
        assert!(is_bypass_path("/_next/static/chunks/app.js"));
        assert!(is_bypass_path("/static/logo.png"));
        assert!(is_bypass_path("/api/tickets"));
        assert!(is_bypass_path("/api"));
        assert!(is_bypass_path("/favicon.ico"));
        assert!(is_bypass_path("/robots.txt"));
        assert!(is_bypass_path("/docs/Guide.PDF"));

        assert!(!is_bypass_path("/"));
        assert!(!is_bypass_path("/dashboard"));
        assert!(!is_bypass_path("/apis"));
        assert!(!is_bypass_path("/.well-known"));
        assert!(!is_bypass_path(""));
        assert!(!is_bypass_path("/users/ana.silva"));
        assert!(!is_bypass_path("/tickets/v1.2"));
        assert!(!is_bypass_path("/.env"));
    }

    #[test]
    fn test_policy_governs_protected_and_guest_only_paths() {
        let policy = RoutePolicy::default();

        assert!(policy.governs("/dashboard"));
        assert!(policy.governs("/dashboard/report.pdf"));
        assert!(policy.governs("/login"));
        assert!(!policy.governs("/dashboards"));
        assert!(!policy.governs("/logo.svg"));
    }

    #[test]
    fn test_anonymous_visitor_is_sent_to_login() {
        let policy = RoutePolicy::default();

        assert_eq!(
            policy.evaluate("/dashboard", false),
            RouteVerdict::redirect("/login")
        );
        assert_eq!(
            policy.evaluate("/dashboard/tickets/7", false),
            RouteVerdict::redirect("/login")
        );
    }

    #[test]
    fn test_authenticated_user_skips_login() {
        let policy = RoutePolicy::default();

        assert_eq!(
            policy.evaluate("/login", true),
            RouteVerdict::redirect("/dashboard")
        );
        assert_eq!(policy.evaluate("/login", false), RouteVerdict::Continue);
    }

    #[test]
    fn test_public_pages_continue() {
        let policy = RoutePolicy::default();

        for path in ["/", "/about", "/contact", "/dashboards", ""] {
            assert_eq!(policy.evaluate(path, false), RouteVerdict::Continue, "{path}");
            assert_eq!(policy.evaluate(path, true), RouteVerdict::Continue, "{path}");
        }
        assert_eq!(policy.evaluate("/dashboard", true), RouteVerdict::Continue);
    }

    #[test]
    fn test_custom_policy() {
        let policy = RoutePolicy {
            protected_prefixes: vec!["/admin".into(), "/reports".into()],
            guest_only: vec!["/signin".into(), "/register".into()],
            login_path: "/signin".into(),
            home_path: "/admin".into(),
        };

        assert_eq!(policy.evaluate("/reports/q3", false), RouteVerdict::redirect("/signin"));
        assert_eq!(policy.evaluate("/register", true), RouteVerdict::redirect("/admin"));
        assert_eq!(policy.evaluate("/dashboard", false), RouteVerdict::Continue);
    }
}
