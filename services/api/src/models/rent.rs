//! Rent model and related payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Lifecycle of a rent: a room has at most one active rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RentStatus {
    Active,
    Ended,
}

impl RentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentStatus::Active => "active",
            RentStatus::Ended => "ended",
        }
    }
}

/// Rent entity binding a tenant to a room
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Rent {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub monthly_price: i64,
    /// `active` or `ended`
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRentRequest {
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Agreed price, stored as given
    pub monthly_price: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRentRequest {
    pub end_date: Option<NaiveDate>,
    pub monthly_price: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EndRentQuery {
    /// Defaults to today
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RentQuery {
    pub status: Option<RentStatus>,
}
