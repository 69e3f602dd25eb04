//! Facilities controller

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::when_present;
use crate::{
    error::{ApiError, ApiJson, ApiPath, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{CreateFacilityRequest, DeleteResponse, Facility, UpdateFacilityRequest},
    state::AppState,
    validation::{check, validate_required},
};

const FACILITY_NOT_FOUND: &str = "Facility not found";

#[utoipa::path(
    post,
    path = "/facilities",
    request_body = CreateFacilityRequest,
    responses(
        (status = 201, description = "Facility successfully created", body = Facility),
        (status = 400, description = "Validation error", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Facilities"
)]
pub async fn create_facility(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiJson(payload): ApiJson<CreateFacilityRequest>,
) -> ApiResult<impl IntoResponse> {
    check([validate_required("Name", &payload.name, 100)])?;

    let facility = state.facility_repository.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(facility)))
}

#[utoipa::path(
    get,
    path = "/facilities",
    responses((status = 200, description = "Facilities successfully retrieved", body = [Facility])),
    security(("api_key" = [], "bearer" = [])),
    tag = "Facilities"
)]
pub async fn get_facilities(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<Facility>>> {
    Ok(Json(state.facility_repository.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/facilities/{id}",
    params(("id" = Uuid, Path, description = "Facility id")),
    responses(
        (status = 200, description = "Facility successfully found", body = Facility),
        (status = 404, description = "Facility not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Facilities"
)]
pub async fn get_facility(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Facility>> {
    state
        .facility_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(FACILITY_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/facilities/{id}",
    params(("id" = Uuid, Path, description = "Facility id")),
    request_body = UpdateFacilityRequest,
    responses(
        (status = 200, description = "Facility successfully updated", body = Facility),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Facility not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Facilities"
)]
pub async fn update_facility(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateFacilityRequest>,
) -> ApiResult<Json<Facility>> {
    check([when_present(payload.name.as_deref(), |name| {
        validate_required("Name", name, 100)
    })])?;

    state
        .facility_repository
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(FACILITY_NOT_FOUND))
}

#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    params(("id" = Uuid, Path, description = "Facility id")),
    responses(
        (status = 200, description = "Facility successfully deleted", body = DeleteResponse),
        (status = 404, description = "Facility not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Facilities"
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.facility_repository.delete(id).await? {
        Ok(Json(DeleteResponse::new(id, "Facility")))
    } else {
        Err(ApiError::not_found(FACILITY_NOT_FOUND))
    }
}
