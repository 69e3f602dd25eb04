//! Reports controller

use axum::{Json, extract::State};

use crate::{
    error::{ApiQuery, ApiResult, ValidationError},
    guard::AuthUser,
    models::{ReportQuery, ReportSummary},
    state::AppState,
    validation::{check, validate_date_range},
};

#[utoipa::path(
    get,
    path = "/reports/summary",
    params(ReportQuery),
    responses(
        (status = 200, description = "Summary successfully computed", body = ReportSummary),
        (status = 400, description = "Invalid date range", body = ValidationError),
    ),
    security(("api_key" = [], "bearer" = [])),
    tag = "Reports"
)]
pub async fn get_summary(
    State(state): State<AppState>,
    _user: AuthUser,
    ApiQuery(query): ApiQuery<ReportQuery>,
) -> ApiResult<Json<ReportSummary>> {
    check([validate_date_range(query.from, query.to)])?;
    Ok(Json(state.report_repository.summary(&query).await?))
}
