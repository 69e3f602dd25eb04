//! Report payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Inclusive lower bound for finance totals
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound for finance totals
    pub to: Option<NaiveDate>,
}

/// Occupancy and money totals for the property
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReportSummary {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub room_count: i64,
    pub occupied_rooms: i64,
    pub vacant_rooms: i64,
    pub tenant_count: i64,
    pub active_rents: i64,
    pub income_total: i64,
    pub expense_total: i64,
    pub balance: i64,
}
