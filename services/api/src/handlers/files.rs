//! File storage controller
//!
//! Uploads land in the configured upload directory under a generated name.
//! The same directory is served back under `/files/<name>`.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use tower_http::services::ServeDir;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult, ErrorResponse, ValidationError},
    state::AppState,
};

const FILE_FIELD: &str = "file";
const MAX_EXTENSION_LEN: usize = 10;

/// Multipart form accepted by the upload endpoint
#[derive(Debug, ToSchema)]
pub struct FileUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Stored file descriptor
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FileUploadResponse {
    pub filename: String,
    pub url: String,
    pub size: usize,
}

/// Router mounted under `/files`: upload on `POST /`, downloads for everything else
pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/", post(upload_file))
        .fallback_service(ServeDir::new(state.upload_dir.as_path()))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .with_state(state.clone())
}

/// A stored file reference must be a bare name inside the upload directory
pub fn validate_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("File name is required".to_string());
    }

    if name.len() > 255
        || name.contains(['/', '\\'])
        || name.starts_with('.')
        || name.contains("..")
    {
        return Err("File name must be a plain file name".to_string());
    }

    Ok(())
}

/// Lowercased extension of the client's file name, if it is short and alphanumeric
fn sanitized_extension(original: Option<&str>) -> Option<String> {
    let ext = Path::new(original?).extension()?.to_str()?;

    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

/// Keep the size-limit rejection distinct from malformed multipart bodies
fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(err.body_text())
    }
}

fn stored_name(original: Option<&str>) -> String {
    match sanitized_extension(original) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

#[utoipa::path(
    post,
    path = "/files",
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File successfully stored", body = FileUploadResponse),
        (status = 400, description = "Missing or malformed upload", body = ValidationError),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "File could not be written", body = ErrorResponse),
    ),
    tag = "Files"
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = stored_name(field.file_name());
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        if bytes.is_empty() {
            return Err(ApiError::validation("File must not be empty"));
        }

        tokio::fs::write(state.upload_dir.join(&filename), &bytes)
            .await
            .map_err(|e| {
                error!("Failed to store upload {}: {}", filename, e);
                ApiError::InternalServerError
            })?;

        info!("Stored upload {} ({} bytes)", filename, bytes.len());

        let response = FileUploadResponse {
            url: format!("/files/{}", filename),
            size: bytes.len(),
            filename,
        };
        return Ok((StatusCode::CREATED, Json(response)));
    }

    Err(ApiError::validation("File is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("0b7c3c2e-card.png").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("nested/card.png").is_err());
        assert!(validate_file_name(".hidden").is_err());
    }

    #[test]
    fn test_sanitized_extension() {
        assert_eq!(sanitized_extension(Some("KTP.JPG")).as_deref(), Some("jpg"));
        assert_eq!(sanitized_extension(Some("archive.tar.gz")).as_deref(), Some("gz"));
        assert_eq!(sanitized_extension(Some("noext")), None);
        assert_eq!(sanitized_extension(Some("evil.p$p")), None);
        assert_eq!(sanitized_extension(None), None);
    }

    #[test]
    fn test_stored_name_is_generated() {
        let name = stored_name(Some("../../card.png"));
        assert!(name.ends_with(".png"));
        assert!(validate_file_name(&name).is_ok());
        assert_ne!(name, stored_name(Some("../../card.png")));
    }
}
