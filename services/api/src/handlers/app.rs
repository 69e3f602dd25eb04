//! Service root

use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    /// `ok` or `unavailable`
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service information", body = AppInfo)),
    tag = "App"
)]
pub async fn root(State(state): State<AppState>) -> Json<AppInfo> {
    let database = match common::database::health_check(&state.db_pool).await {
        Ok(true) => "ok",
        _ => "unavailable",
    };

    Json(AppInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "ok".to_string(),
        database: database.to_string(),
    })
}
