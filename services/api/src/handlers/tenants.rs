//! Tenants controller

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::{files::validate_file_name, when_present};
use crate::{
    error::{ApiError, ApiJson, ApiPath, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{CreateTenantRequest, DeleteResponse, Tenant, UpdateTenantRequest},
    state::AppState,
    validation::{check, validate_email, validate_phone, validate_required},
};

const TENANT_NOT_FOUND: &str = "Tenant not found";

fn validate_id_card_number(value: &str) -> Result<(), String> {
    validate_required("ID card number", value, 32)
}

#[utoipa::path(
    post,
    path = "/tenants",
    request_body = CreateTenantRequest,
    responses(
        (status = 201, description = "Tenant successfully created", body = Tenant),
        (status = 400, description = "Validation error", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Tenants"
)]
pub async fn create_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiJson(payload): ApiJson<CreateTenantRequest>,
) -> ApiResult<impl IntoResponse> {
    check([
        validate_required("Name", &payload.name, 100),
        validate_phone(&payload.phone),
        when_present(payload.email.as_deref(), validate_email),
        when_present(payload.id_card_number.as_deref(), validate_id_card_number),
        when_present(payload.id_card_file.as_deref(), validate_file_name),
    ])?;

    let tenant = state.tenant_repository.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

#[utoipa::path(
    get,
    path = "/tenants",
    responses((status = 200, description = "Tenants successfully retrieved", body = [Tenant])),
    security(("api_key" = [], "bearer" = [])),
    tag = "Tenants"
)]
pub async fn get_tenants(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<Tenant>>> {
    Ok(Json(state.tenant_repository.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/tenants/{id}",
    params(("id" = Uuid, Path, description = "Tenant id")),
    responses(
        (status = 200, description = "Tenant successfully found", body = Tenant),
        (status = 404, description = "Tenant not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Tenants"
)]
pub async fn get_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Tenant>> {
    state
        .tenant_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(TENANT_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/tenants/{id}",
    params(("id" = Uuid, Path, description = "Tenant id")),
    request_body = UpdateTenantRequest,
    responses(
        (status = 200, description = "Tenant successfully updated", body = Tenant),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Tenant not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Tenants"
)]
pub async fn update_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateTenantRequest>,
) -> ApiResult<Json<Tenant>> {
    check([
        when_present(payload.name.as_deref(), |name| validate_required("Name", name, 100)),
        when_present(payload.phone.as_deref(), validate_phone),
        when_present(payload.email.as_deref(), validate_email),
        when_present(payload.id_card_number.as_deref(), validate_id_card_number),
        when_present(payload.id_card_file.as_deref(), validate_file_name),
    ])?;

    state
        .tenant_repository
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(TENANT_NOT_FOUND))
}

#[utoipa::path(
    delete,
    path = "/tenants/{id}",
    params(("id" = Uuid, Path, description = "Tenant id")),
    responses(
        (status = 200, description = "Tenant successfully deleted", body = DeleteResponse),
        (status = 400, description = "Tenant still has rents", body = ValidationError),
        (status = 404, description = "Tenant not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Tenants"
)]
pub async fn delete_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.tenant_repository.delete(id).await? {
        Ok(Json(DeleteResponse::new(id, "Tenant")))
    } else {
        Err(ApiError::not_found(TENANT_NOT_FOUND))
    }
}
