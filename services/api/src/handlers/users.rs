//! Users controller
//!
//! Every handler hands its input to [`UsersService`](crate::services::UsersService)
//! and returns the service's result as is.

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::{
    error::{ApiJson, ApiPath, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{
        DeleteResponse, UserDetailResponse, UserLoginRequest, UserLoginResponse,
        UserUpdateRequest,
    },
    state::AppState,
};

#[utoipa::path(
    patch,
    path = "/users",
    request_body = UserLoginRequest,
    responses(
        (status = 200, description = "User successfully logged in", body = UserLoginResponse),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Email or password is incorrect", body = ErrorResponse),
    ),
    security(("api_key" = [])),
    tag = "Users"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UserLoginRequest>,
) -> ApiResult<Json<UserLoginResponse>> {
    state.users_service.sign_in(request).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users successfully retrieved", body = [UserDetailResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Users"
)]
pub async fn find_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<UserDetailResponse>>> {
    state.users_service.find_all().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User successfully found", body = UserDetailResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Users"
)]
pub async fn find_one(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<UserDetailResponse>> {
    state.users_service.find_one(id).await.map(Json)
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UserUpdateRequest,
    responses(
        (status = 200, description = "User successfully updated", body = UserDetailResponse),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Users"
)]
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UserUpdateRequest>,
) -> ApiResult<Json<UserDetailResponse>> {
    state.users_service.update(id, request).await.map(Json)
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User successfully deleted", body = DeleteResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Users"
)]
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    state.users_service.delete(id).await.map(Json)
}
