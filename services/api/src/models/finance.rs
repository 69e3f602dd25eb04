//! Finance record model and related payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FinanceKind {
    Income,
    Expense,
}

impl FinanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinanceKind::Income => "income",
            FinanceKind::Expense => "expense",
        }
    }
}

/// Money moving in or out of the property
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct FinanceRecord {
    pub id: Uuid,
    /// `income` or `expense`
    pub kind: String,
    pub category: String,
    /// Positive amount in the smallest currency unit
    pub amount: i64,
    pub description: Option<String>,
    pub rent_id: Option<Uuid>,
    pub transaction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFinanceRequest {
    pub kind: FinanceKind,
    pub category: String,
    pub amount: i64,
    pub description: Option<String>,
    pub rent_id: Option<Uuid>,
    /// Defaults to today
    pub transaction_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateFinanceRequest {
    pub kind: Option<FinanceKind>,
    pub category: Option<String>,
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub rent_id: Option<Uuid>,
    pub transaction_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FinanceQuery {
    pub kind: Option<FinanceKind>,
    /// Inclusive lower bound on the transaction date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the transaction date
    pub to: Option<NaiveDate>,
}
