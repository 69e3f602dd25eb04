//! Tenant model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Tenant entity
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub id_card_number: Option<String>,
    /// Name of an uploaded file, served under `/files`
    pub id_card_file: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for registering a tenant
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateTenantRequest {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub id_card_number: Option<String>,
    pub id_card_file: Option<String>,
    pub address: Option<String>,
}

/// Request for updating a tenant; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTenantRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub id_card_number: Option<String>,
    pub id_card_file: Option<String>,
    pub address: Option<String>,
}
