//! Custom error types for the API service

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Error body returned for every non-validation failure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

/// Error body returned when request input fails validation
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationError {
    pub status_code: u16,
    pub message: Vec<String>,
    pub error: String,
}

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// One or more input fields failed validation
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request body exceeds the configured limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(vec![message.into()])
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(DatabaseError::from(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    let body = ErrorResponse {
        status_code: status.as_u16(),
        message,
        error: status.canonical_reason().unwrap_or("Error").to_string(),
    };
    (status, Json(body)).into_response()
}

fn validation_body(messages: Vec<String>) -> Response {
    let status = StatusCode::BAD_REQUEST;
    let body = ValidationError {
        status_code: status.as_u16(),
        message: messages,
        error: "Bad Request".to_string(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => error_body(StatusCode::UNAUTHORIZED, msg),
            ApiError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(messages) => validation_body(messages),
            ApiError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            ApiError::PayloadTooLarge(msg) => error_body(StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::InternalServerError => error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Database(err) if err.is_unique_violation() => {
                validation_body(vec!["A record with the same unique value already exists".to_string()])
            }
            ApiError::Database(err) if err.is_foreign_key_violation() => validation_body(vec![
                "The record references, or is referenced by, another record".to_string(),
            ]),
            ApiError::Database(err) => {
                error!("Database error: {}", err);
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON body extractor that reports malformed payloads as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor that reports malformed parameters as [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query extractor that reports malformed parameters as [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_error_response() {
        let response = ApiError::not_found("User not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["status_code"], 404);
        assert_eq!(json["message"], "User not found");
        assert_eq!(json["error"], "Not Found");
    }

    #[tokio::test]
    async fn validation_renders_message_list() {
        let response = ApiError::Validation(vec![
            "Email is required".to_string(),
            "Password is required".to_string(),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["status_code"], 400);
        assert_eq!(json["message"][1], "Password is required");
        assert_eq!(json["error"], "Bad Request");
    }

    #[tokio::test]
    async fn payload_too_large_keeps_its_status() {
        let response = ApiError::PayloadTooLarge("Upload too large".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let json = body_json(response).await;
        assert_eq!(json["status_code"], 413);
        assert_eq!(json["error"], "Payload Too Large");
    }

    #[tokio::test]
    async fn database_errors_hide_details() {
        let response = ApiError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal server error");
    }
}
