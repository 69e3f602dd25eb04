//! Bearer token guard for individual routes
//!
//! Adding [`AuthUser`] to a handler's arguments makes the route require a
//! valid access token. Routes without it stay open to any caller that got
//! past the API-key middleware.

use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::warn;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Authenticated caller, taken from a validated access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized("Missing bearer token".to_string()))?;

        let claims = state
            .jwt_service
            .validate_token(bearer.token())
            .map_err(|e| {
                warn!("Rejected bearer token: {}", e);
                ApiError::Unauthorized("Invalid or expired bearer token".to_string())
            })?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}
