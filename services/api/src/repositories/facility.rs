//! Facility repository for database operations

use common::error::DatabaseResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateFacilityRequest, Facility, UpdateFacilityRequest};

/// Facility repository for database operations
#[derive(Clone)]
pub struct FacilityRepository {
    pool: PgPool,
}

impl FacilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateFacilityRequest) -> DatabaseResult<Facility> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            INSERT INTO facilities (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(payload.name.trim())
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(facility)
    }

    pub async fn get_all(&self) -> DatabaseResult<Vec<Facility>> {
        let facilities = sqlx::query_as::<_, Facility>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM facilities
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(facilities)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Facility>> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM facilities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(facility)
    }

    /// IDs from `ids` that do not name an existing facility
    pub async fn find_missing(&self, ids: &[Uuid]) -> DatabaseResult<Vec<Uuid>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM facilities WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids
            .iter()
            .filter(|id| !existing.contains(id))
            .copied()
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateFacilityRequest,
    ) -> DatabaseResult<Option<Facility>> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            UPDATE facilities
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref().map(str::trim))
        .bind(&payload.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(facility)
    }

    /// Delete a facility and detach it from every room
    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE rooms SET facility_ids = array_remove(facility_ids, $1)")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
