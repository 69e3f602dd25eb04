//! Finances controller

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use uuid::Uuid;

use super::when_present;
use crate::{
    error::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult, ErrorResponse, ValidationError},
    guard::AuthUser,
    models::{
        CreateFinanceRequest, DeleteResponse, FinanceQuery, FinanceRecord, UpdateFinanceRequest,
    },
    state::AppState,
    validation::{check, validate_amount, validate_date_range, validate_required},
};

const FINANCE_NOT_FOUND: &str = "Finance record not found";

fn validate_category(category: &str) -> Result<(), String> {
    validate_required("Category", category, 50)
}

fn validate_positive_amount(amount: &i64) -> Result<(), String> {
    validate_amount("Amount", *amount, false)
}

async fn check_rent_exists(state: &AppState, rent_id: Option<Uuid>) -> ApiResult<()> {
    if let Some(rent_id) = rent_id {
        if state.rent_repository.find_by_id(rent_id).await?.is_none() {
            return Err(ApiError::validation("Rent does not exist"));
        }
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/finances",
    request_body = CreateFinanceRequest,
    responses(
        (status = 201, description = "Finance record successfully created", body = FinanceRecord),
        (status = 400, description = "Validation error", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Finances"
)]
pub async fn create_finance(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiJson(payload): ApiJson<CreateFinanceRequest>,
) -> ApiResult<impl IntoResponse> {
    check([
        validate_category(&payload.category),
        validate_positive_amount(&payload.amount),
    ])?;
    check_rent_exists(&state, payload.rent_id).await?;

    let transaction_date = payload
        .transaction_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let record = state
        .finance_repository
        .create(&payload, transaction_date)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/finances",
    params(FinanceQuery),
    responses(
        (status = 200, description = "Finance records successfully retrieved", body = [FinanceRecord]),
        (status = 400, description = "Invalid filter", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Finances"
)]
pub async fn get_finances(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiQuery(query): ApiQuery<FinanceQuery>,
) -> ApiResult<Json<Vec<FinanceRecord>>> {
    check([validate_date_range(query.from, query.to)])?;
    Ok(Json(state.finance_repository.get_all(&query).await?))
}

#[utoipa::path(
    get,
    path = "/finances/{id}",
    params(("id" = Uuid, Path, description = "Finance record id")),
    responses(
        (status = 200, description = "Finance record successfully found", body = FinanceRecord),
        (status = 404, description = "Finance record not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Finances"
)]
pub async fn get_finance(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<FinanceRecord>> {
    state
        .finance_repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(FINANCE_NOT_FOUND))
}

#[utoipa::path(
    put,
    path = "/finances/{id}",
    params(("id" = Uuid, Path, description = "Finance record id")),
    request_body = UpdateFinanceRequest,
    responses(
        (status = 200, description = "Finance record successfully updated", body = FinanceRecord),
        (status = 400, description = "Validation error", body = ValidationError),
        (status = 404, description = "Finance record not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Finances"
)]
pub async fn update_finance(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateFinanceRequest>,
) -> ApiResult<Json<FinanceRecord>> {
    check([
        when_present(payload.category.as_deref(), validate_category),
        when_present(payload.amount.as_ref(), validate_positive_amount),
    ])?;
    check_rent_exists(&state, payload.rent_id).await?;

    state
        .finance_repository
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(FINANCE_NOT_FOUND))
}

#[utoipa::path(
    delete,
    path = "/finances/{id}",
    params(("id" = Uuid, Path, description = "Finance record id")),
    responses(
        (status = 200, description = "Finance record successfully deleted", body = DeleteResponse),
        (status = 404, description = "Finance record not found", body = ErrorResponse),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Finances"
)]
pub async fn delete_finance(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.finance_repository.delete(id).await? {
        Ok(Json(DeleteResponse::new(id, "Finance record")))
    } else {
        Err(ApiError::not_found(FINANCE_NOT_FOUND))
    }
}
