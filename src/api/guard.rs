//! Route Guard Middleware
//!
//! Runs the routing filter in front of every request and turns redirect
//! verdicts into `307 Temporary Redirect` responses.

use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::handlers::AppState;
use crate::routing::RouteVerdict;

/// Cookie whose presence marks a request as authenticated.
pub const SESSION_COOKIE: &str = "auth-token";

/// True when the request carries a non-empty session cookie.
pub fn is_authenticated(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name == SESSION_COOKIE && !value.is_empty())
}

pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authenticated = is_authenticated(request.headers());
    let path = request.uri().path().to_owned();
    let decision = state.routing.decide(&path, authenticated).await;

    match decision.verdict {
        RouteVerdict::Redirect(target) => Redirect::temporary(&target).into_response(),
        RouteVerdict::Continue => next.run(request).await,
    }
}
