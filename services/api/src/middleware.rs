//! Global API-key middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::{error::ApiError, state::AppState};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// A path pattern the API-key middleware skips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicPath {
    /// Exactly this path
    Exact(&'static str),
    /// This path and everything below it
    Subtree(&'static str),
}

impl PublicPath {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PublicPath::Exact(p) => path == *p,
            PublicPath::Subtree(p) => {
                path == *p || path.strip_prefix(p).is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Paths reachable without an API key, for every method
pub const PUBLIC_PATHS: &[PublicPath] = &[
    PublicPath::Exact("/"),
    PublicPath::Subtree("/docs"),
    PublicPath::Exact("/docs-json"),
    PublicPath::Subtree("/files"),
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|rule| rule.matches(path))
}

/// Reject requests to non-public paths that lack the configured API key
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if is_public_path(req.uri().path()) {
        return next.run(req).await;
    }

    let authenticated = req
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| bool::from(value.as_bytes().ct_eq(state.api_key.as_bytes())))
        .unwrap_or(false);

    if !authenticated {
        warn!(
            "Rejected {} {}: missing or invalid API key",
            req.method(),
            req.uri().path()
        );
        return ApiError::Unauthorized("Invalid or missing API key".to_string()).into_response();
    }

    next.run(req).await
}
