//! Finance repository for database operations

use chrono::NaiveDate;
use common::error::DatabaseResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateFinanceRequest, FinanceQuery, FinanceRecord, UpdateFinanceRequest};

/// Finance repository for database operations
#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        payload: &CreateFinanceRequest,
        transaction_date: NaiveDate,
    ) -> DatabaseResult<FinanceRecord> {
        let record = sqlx::query_as::<_, FinanceRecord>(
            r#"
            INSERT INTO finances (kind, category, amount, description, rent_id, transaction_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, kind, category, amount, description, rent_id, transaction_date,
                      created_at, updated_at
            "#,
        )
        .bind(payload.kind.as_str())
        .bind(payload.category.trim())
        .bind(payload.amount)
        .bind(&payload.description)
        .bind(payload.rent_id)
        .bind(transaction_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Get records, newest first, filtered by kind and date range
    pub async fn get_all(&self, query: &FinanceQuery) -> DatabaseResult<Vec<FinanceRecord>> {
        let records = sqlx::query_as::<_, FinanceRecord>(
            r#"
            SELECT id, kind, category, amount, description, rent_id, transaction_date,
                   created_at, updated_at
            FROM finances
            WHERE ($1::TEXT IS NULL OR kind = $1)
              AND ($2::DATE IS NULL OR transaction_date >= $2)
              AND ($3::DATE IS NULL OR transaction_date <= $3)
            ORDER BY transaction_date DESC, created_at DESC
            "#,
        )
        .bind(query.kind.map(|k| k.as_str()))
        .bind(query.from)
        .bind(query.to)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<FinanceRecord>> {
        let record = sqlx::query_as::<_, FinanceRecord>(
            r#"
            SELECT id, kind, category, amount, description, rent_id, transaction_date,
                   created_at, updated_at
            FROM finances
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateFinanceRequest,
    ) -> DatabaseResult<Option<FinanceRecord>> {
        let record = sqlx::query_as::<_, FinanceRecord>(
            r#"
            UPDATE finances
            SET kind = COALESCE($2, kind),
                category = COALESCE($3, category),
                amount = COALESCE($4, amount),
                description = COALESCE($5, description),
                rent_id = COALESCE($6, rent_id),
                transaction_date = COALESCE($7, transaction_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, kind, category, amount, description, rent_id, transaction_date,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payload.kind.map(|k| k.as_str()))
        .bind(payload.category.as_deref().map(str::trim))
        .bind(payload.amount)
        .bind(&payload.description)
        .bind(payload.rent_id)
        .bind(payload.transaction_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM finances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
