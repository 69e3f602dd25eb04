//! Room model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Room entity
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Room {
    pub id: Uuid,
    pub room_type_id: Uuid,
    pub name: String,
    pub floor: Option<i32>,
    pub facility_ids: Vec<Uuid>,
    pub notes: Option<String>,
    /// True while an active rent references the room
    pub occupied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateRoomRequest {
    pub room_type_id: Uuid,
    pub name: String,
    pub floor: Option<i32>,
    pub facility_ids: Vec<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRoomRequest {
    pub room_type_id: Option<Uuid>,
    pub name: Option<String>,
    pub floor: Option<i32>,
    pub facility_ids: Option<Vec<Uuid>>,
    pub notes: Option<String>,
}

/// Occupancy filter for room listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Occupied,
    Vacant,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomQuery {
    /// Only return occupied or only vacant rooms
    pub status: Option<RoomStatus>,
}
