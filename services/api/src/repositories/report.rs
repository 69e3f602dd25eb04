//! Aggregate queries backing the reports endpoints

use common::error::DatabaseResult;
use sqlx::PgPool;

use crate::models::{ReportQuery, ReportSummary};

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Occupancy counts now, finance totals within the query's date range
    pub async fn summary(&self, query: &ReportQuery) -> DatabaseResult<ReportSummary> {
        let (room_count, occupied_rooms, tenant_count, active_rents, income_total, expense_total): (
            i64,
            i64,
            i64,
            i64,
            i64,
            i64,
        ) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM rooms),
                (SELECT COUNT(DISTINCT room_id) FROM rents WHERE status = 'active'),
                (SELECT COUNT(*) FROM tenants),
                (SELECT COUNT(*) FROM rents WHERE status = 'active'),
                (SELECT COALESCE(SUM(amount), 0)::BIGINT FROM finances
                 WHERE kind = 'income'
                   AND ($1::DATE IS NULL OR transaction_date >= $1)
                   AND ($2::DATE IS NULL OR transaction_date <= $2)),
                (SELECT COALESCE(SUM(amount), 0)::BIGINT FROM finances
                 WHERE kind = 'expense'
                   AND ($1::DATE IS NULL OR transaction_date >= $1)
                   AND ($2::DATE IS NULL OR transaction_date <= $2))
            "#,
        )
        .bind(query.from)
        .bind(query.to)
        .fetch_one(&self.pool)
        .await?;

        Ok(ReportSummary {
            from: query.from,
            to: query.to,
            room_count,
            occupied_rooms,
            vacant_rooms: room_count - occupied_rooms,
            tenant_count,
            active_rents,
            income_total,
            expense_total,
            balance: income_total - expense_total,
        })
    }
}
