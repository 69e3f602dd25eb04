//! Rents controller
//!
//! A rent binds a tenant to a room. A room holds at most one active rent;
//! ending a rent frees the room.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::when_present;
use crate::{
    error::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{
        CreateRentRequest, DeleteResponse, EndRentQuery, Rent, RentQuery, RentStatus,
        UpdateRentRequest,
    },
    state::AppState,
    validation::{check, validate_amount},
};

const RENT_NOT_FOUND: &str = "Rent not found";

fn validate_end_date(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), String> {
    if end_date < start_date {
        return Err("End date must not be before start date".to_string());
    }
    Ok(())
}

fn validate_monthly_price(price: &i64) -> Result<(), String> {
    validate_amount("Monthly price", *price, true)
}

#[utoipa::path(
    post,
    path = "/rents",
    request_body = CreateRentRequest,
    responses(
        (status = 201, description = "Rent successfully created", body = Rent),
        (status = 400, description = "Validation error or room already occupied", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rents"
)]
pub async fn create_rent(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiJson(payload): ApiJson<CreateRentRequest>,
) -> ApiResult<impl IntoResponse> {
    check([
        when_present(payload.end_date.as_ref(), |end| {
            validate_end_date(payload.start_date, *end)
        }),
        validate_monthly_price(&payload.monthly_price),
    ])?;

    if state
        .tenant_repository
        .find_by_id(payload.tenant_id)
        .await?
        .is_none()
    {
        return Err(ApiError::validation("Tenant does not exist"));
    }

    let room = state
        .room_repository
        .find_by_id(payload.room_id)
        .await?
        .ok_or_else(|| ApiError::validation("Room does not exist"))?;

    // The active-rent unique index still catches a concurrent create
    if room.occupied {
        return Err(ApiError::validation("Room is already occupied"));
    }

    let rent = state.rent_repository.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(rent)))
}

#[utoipa::path(
    get,
    path = "/rents",
    params(RentQuery),
    responses(
        (status = 200, description = "Rents successfully retrieved", body = [Rent]),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rents"
)]
pub async fn get_rents(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiQuery(query): ApiQuery<RentQuery>,
) -> ApiResult<Json<Vec<Rent>>> {
    Ok(Json(state.rent_repository.get_all(query.status).await?))
}

#[utoipa::path(
    get,
    path = "/rents/{id}",
    params(("id" = Uuid, Path, description = "Rent id")),
    responses(
        (status = 200, description = "Rent successfully found", body = Rent),
        (status = 404, description = "Rent not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rents"
)]
pub async fn get_rent(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Rent>> {
    state
        .rent_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(RENT_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/rents/{id}",
    params(("id" = Uuid, Path, description = "Rent id")),
    request_body = UpdateRentRequest,
    responses(
        (status = 200, description = "Rent successfully updated", body = Rent),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Rent not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rents"
)]
pub async fn update_rent(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateRentRequest>,
) -> ApiResult<Json<Rent>> {
    let rent = state
        .rent_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(RENT_NOT_FOUND))?;

    check([
        when_present(payload.end_date.as_ref(), |end| {
            validate_end_date(rent.start_date, *end)
        }),
        when_present(payload.monthly_price.as_ref(), validate_monthly_price),
    ])?;

    state
        .rent_repository
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(RENT_NOT_FOUND))
}

#[utoipa::path(
    patch,
    path = "/rents/{id}/end",
    params(("id" = Uuid, Path, description = "Rent id"), EndRentQuery),
    responses(
        (status = 200, description = "Rent successfully ended", body = Rent),
        (status = 400, description = "Rent already ended or end date before start", body = ValidationError),
        (status = 404, description = "Rent not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rents"
)]
pub async fn end_rent(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<EndRentQuery>,
) -> ApiResult<Json<Rent>> {
    let rent = state
        .rent_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(RENT_NOT_FOUND))?;

    if rent.status != RentStatus::Active.as_str() {
        return Err(ApiError::validation("Rent has already ended"));
    }

    let end_date = query.end_date.unwrap_or_else(|| Utc::now().date_naive());
    check([validate_end_date(rent.start_date, end_date)])?;

    // Ended concurrently between the lookup and the update
    state
        .rent_repository
        .end(id, end_date)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::validation("Rent has already ended"))
}

#[utoipa::path(
    delete,
    path = "/rents/{id}",
    params(("id" = Uuid, Path, description = "Rent id")),
    responses(
        (status = 200, description = "Rent successfully deleted", body = DeleteResponse),
        (status = 404, description = "Rent not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rents"
)]
pub async fn delete_rent(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.rent_repository.delete(id).await? {
        Ok(Json(DeleteResponse::new(id, "Rent")))
    } else {
        Err(ApiError::not_found(RENT_NOT_FOUND))
    }
}
