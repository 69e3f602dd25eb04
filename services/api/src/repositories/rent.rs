//! Rent repository for database operations

use chrono::NaiveDate;
use common::error::DatabaseResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateRentRequest, Rent, RentStatus, UpdateRentRequest};

/// Rent repository for database operations
#[derive(Clone)]
pub struct RentRepository {
    pool: PgPool,
}

impl RentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateRentRequest) -> DatabaseResult<Rent> {
        let rent = sqlx::query_as::<_, Rent>(
            r#"
            INSERT INTO rents (tenant_id, room_id, start_date, end_date, monthly_price, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tenant_id, room_id, start_date, end_date, monthly_price, status,
                      notes, created_at, updated_at
            "#,
        )
        .bind(payload.tenant_id)
        .bind(payload.room_id)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.monthly_price)
        .bind(&payload.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(rent)
    }

    /// Get rents, newest start first, optionally filtered on status
    pub async fn get_all(&self, status: Option<RentStatus>) -> DatabaseResult<Vec<Rent>> {
        let rents = sqlx::query_as::<_, Rent>(
            r#"
            SELECT id, tenant_id, room_id, start_date, end_date, monthly_price, status,
                   notes, created_at, updated_at
            FROM rents
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rents)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Rent>> {
        let rent = sqlx::query_as::<_, Rent>(
            r#"
            SELECT id, tenant_id, room_id, start_date, end_date, monthly_price, status,
                   notes, created_at, updated_at
            FROM rents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rent)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateRentRequest,
    ) -> DatabaseResult<Option<Rent>> {
        let rent = sqlx::query_as::<_, Rent>(
            r#"
            UPDATE rents
            SET end_date = COALESCE($2, end_date),
                monthly_price = COALESCE($3, monthly_price),
                notes = COALESCE($4, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, tenant_id, room_id, start_date, end_date, monthly_price, status,
                      notes, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payload.end_date)
        .bind(payload.monthly_price)
        .bind(&payload.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rent)
    }

    /// End an active rent; `None` when the rent is missing or already ended
    pub async fn end(&self, id: Uuid, end_date: NaiveDate) -> DatabaseResult<Option<Rent>> {
        let rent = sqlx::query_as::<_, Rent>(
            r#"
            UPDATE rents
            SET status = 'ended',
                end_date = $2,
                updated_at = NOW()
            WHERE id = $1 AND status = 'active'
            RETURNING id, tenant_id, room_id, start_date, end_date, monthly_price, status,
                      notes, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rent)
    }

    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM rents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
