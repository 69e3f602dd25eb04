//! Room types controller

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::when_present;
use crate::{
    error::{ApiError, ApiJson, ApiPath, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{CreateRoomTypeRequest, DeleteResponse, RoomType, UpdateRoomTypeRequest},
    state::AppState,
    validation::{check, validate_amount, validate_required},
};

const ROOM_TYPE_NOT_FOUND: &str = "Room type not found";

#[utoipa::path(
    post,
    path = "/roomtypes",
    request_body = CreateRoomTypeRequest,
    responses(
        (status = 201, description = "Room type successfully created", body = RoomType),
        (status = 400, description = "Validation error", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Room types"
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiJson(payload): ApiJson<CreateRoomTypeRequest>,
) -> ApiResult<impl IntoResponse> {
    check([
        validate_required("Name", &payload.name, 100),
        validate_amount("Monthly price", payload.monthly_price, true),
    ])?;

    let room_type = state.room_type_repository.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(room_type)))
}

#[utoipa::path(
    get,
    path = "/roomtypes",
    responses((status = 200, description = "Room types successfully retrieved", body = [RoomType])),
    security(("api_key" = [], "bearer" = [])),
    tag = "Room types"
)]
pub async fn get_room_types(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<RoomType>>> {
    Ok(Json(state.room_type_repository.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/roomtypes/{id}",
    params(("id" = Uuid, Path, description = "Room type id")),
    responses(
        (status = 200, description = "Room type successfully found", body = RoomType),
        (status = 404, description = "Room type not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Room types"
)]
pub async fn get_room_type(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<RoomType>> {
    state
        .room_type_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ROOM_TYPE_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/roomtypes/{id}",
    params(("id" = Uuid, Path, description = "Room type id")),
    request_body = UpdateRoomTypeRequest,
    responses(
        (status = 200, description = "Room type successfully updated", body = RoomType),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Room type not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Room types"
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateRoomTypeRequest>,
) -> ApiResult<Json<RoomType>> {
    check([
        when_present(payload.name.as_deref(), |name| validate_required("Name", name, 100)),
        when_present(payload.monthly_price.as_ref(), |price| {
            validate_amount("Monthly price", *price, true)
        }),
    ])?;

    state
        .room_type_repository
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ROOM_TYPE_NOT_FOUND))
}

#[utoipa::path(
    delete,
    path = "/roomtypes/{id}",
    params(("id" = Uuid, Path, description = "Room type id")),
    responses(
        (status = 200, description = "Room type successfully deleted", body = DeleteResponse),
        (status = 400, description = "Room type still used by rooms", body = ValidationError),
        (status = 404, description = "Room type not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Room types"
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.room_type_repository.delete(id).await? {
        Ok(Json(DeleteResponse::new(id, "Room type")))
    } else {
        Err(ApiError::not_found(ROOM_TYPE_NOT_FOUND))
    }
}
