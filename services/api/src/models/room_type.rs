//! Room type model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Room type entity, e.g. "Standard" or "Deluxe with bathroom"
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct RoomType {
    pub id: Uuid,
    pub name: String,
    /// Default monthly price in the smallest currency unit
    pub monthly_price: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateRoomTypeRequest {
    pub name: String,
    pub monthly_price: i64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub monthly_price: Option<i64>,
    pub description: Option<String>,
}
