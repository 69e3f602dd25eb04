//! Room type repository for database operations

use common::error::DatabaseResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateRoomTypeRequest, RoomType, UpdateRoomTypeRequest};

/// Room type repository for database operations
#[derive(Clone)]
pub struct RoomTypeRepository {
    pool: PgPool,
}

impl RoomTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateRoomTypeRequest) -> DatabaseResult<RoomType> {
        let room_type = sqlx::query_as::<_, RoomType>(
            r#"
            INSERT INTO room_types (name, monthly_price, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, monthly_price, description, created_at, updated_at
            "#,
        )
        .bind(payload.name.trim())
        .bind(payload.monthly_price)
        .bind(&payload.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(room_type)
    }

    pub async fn get_all(&self) -> DatabaseResult<Vec<RoomType>> {
        let room_types = sqlx::query_as::<_, RoomType>(
            r#"
            SELECT id, name, monthly_price, description, created_at, updated_at
            FROM room_types
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(room_types)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<RoomType>> {
        let room_type = sqlx::query_as::<_, RoomType>(
            r#"
            SELECT id, name, monthly_price, description, created_at, updated_at
            FROM room_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room_type)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateRoomTypeRequest,
    ) -> DatabaseResult<Option<RoomType>> {
        let room_type = sqlx::query_as::<_, RoomType>(
            r#"
            UPDATE room_types
            SET name = COALESCE($2, name),
                monthly_price = COALESCE($3, monthly_price),
                description = COALESCE($4, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, monthly_price, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref().map(str::trim))
        .bind(payload.monthly_price)
        .bind(&payload.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room_type)
    }

    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM room_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
