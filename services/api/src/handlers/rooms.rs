//! Rooms controller

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::when_present;
use crate::{
    error::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{CreateRoomRequest, DeleteResponse, Room, RoomQuery, UpdateRoomRequest},
    state::AppState,
    validation::{check, validate_required},
};

const ROOM_NOT_FOUND: &str = "Room not found";

fn dedup_preserving_order(ids: &mut Vec<Uuid>) {
    let mut seen = Vec::with_capacity(ids.len());
    ids.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(*id);
            true
        }
    });
}

fn validate_floor(floor: &i32) -> Result<(), String> {
    if *floor < 0 {
        return Err("Floor must not be negative".to_string());
    }
    Ok(())
}

/// Referenced room type and facilities must exist
async fn check_references(
    state: &AppState,
    room_type_id: Option<Uuid>,
    facility_ids: &[Uuid],
) -> ApiResult<()> {
    let mut messages = Vec::new();

    if let Some(room_type_id) = room_type_id {
        if state.room_type_repository.find_by_id(room_type_id).await?.is_none() {
            messages.push("Room type does not exist".to_string());
        }
    }

    let missing = state.facility_repository.find_missing(facility_ids).await?;
    messages.extend(
        missing
            .into_iter()
            .map(|id| format!("Facility {} does not exist", id)),
    );

    check(messages.into_iter().map(Err))
}

#[utoipa::path(
    post,
    path = "/rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room successfully created", body = Room),
        (status = 400, description = "Validation error", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiJson(mut payload): ApiJson<CreateRoomRequest>,
) -> ApiResult<impl IntoResponse> {
    check([
        validate_required("Name", &payload.name, 50),
        when_present(payload.floor.as_ref(), validate_floor),
    ])?;

    dedup_preserving_order(&mut payload.facility_ids);
    check_references(&state, Some(payload.room_type_id), &payload.facility_ids).await?;

    let room = state.room_repository.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

#[utoipa::path(
    get,
    path = "/rooms",
    params(RoomQuery),
    responses(
        (status = 200, description = "Rooms successfully retrieved", body = [Room]),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rooms"
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiQuery(query): ApiQuery<RoomQuery>,
) -> ApiResult<Json<Vec<Room>>> {
    Ok(Json(state.room_repository.get_all(query.status).await?))
}

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room id")),
    responses(
        (status = 200, description = "Room successfully found", body = Room),
        (status = 404, description = "Room not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rooms"
)]
pub async fn get_room(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Room>> {
    state
        .room_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ROOM_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room id")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room successfully updated", body = Room),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Room not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rooms"
)]
pub async fn update_room(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(mut payload): ApiJson<UpdateRoomRequest>,
) -> ApiResult<Json<Room>> {
    check([
        when_present(payload.name.as_deref(), |name| validate_required("Name", name, 50)),
        when_present(payload.floor.as_ref(), validate_floor),
    ])?;

    if state.room_repository.find_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(ROOM_NOT_FOUND));
    }

    if let Some(facility_ids) = payload.facility_ids.as_mut() {
        dedup_preserving_order(facility_ids);
    }
    check_references(
        &state,
        payload.room_type_id,
        payload.facility_ids.as_deref().unwrap_or_default(),
    )
    .await?;

    state
        .room_repository
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ROOM_NOT_FOUND))
}

#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room id")),
    responses(
        (status = 200, description = "Room successfully deleted", body = DeleteResponse),
        (status = 400, description = "Room still has rents", body = ValidationError),
        (status = 404, description = "Room not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.room_repository.delete(id).await? {
        Ok(Json(DeleteResponse::new(id, "Room")))
    } else {
        Err(ApiError::not_found(ROOM_NOT_FOUND))
    }
}
