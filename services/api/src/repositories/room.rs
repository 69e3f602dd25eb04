//! Room repository for database operations

use common::error::DatabaseResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateRoomRequest, Room, RoomStatus, UpdateRoomRequest};

const OCCUPIED: &str =
    "EXISTS (SELECT 1 FROM rents WHERE rents.room_id = rooms.id AND rents.status = 'active')";

/// Room repository for database operations
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateRoomRequest) -> DatabaseResult<Room> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (room_type_id, name, floor, facility_ids, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, room_type_id, name, floor, facility_ids, notes,
                      FALSE AS occupied, created_at, updated_at
            "#,
        )
        .bind(payload.room_type_id)
        .bind(payload.name.trim())
        .bind(payload.floor)
        .bind(&payload.facility_ids)
        .bind(&payload.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(room)
    }

    /// Get rooms ordered by name, optionally filtered on occupancy
    pub async fn get_all(&self, status: Option<RoomStatus>) -> DatabaseResult<Vec<Room>> {
        let occupied = status.map(|s| s == RoomStatus::Occupied);
        let sql = format!(
            r#"
            SELECT id, room_type_id, name, floor, facility_ids, notes,
                   {OCCUPIED} AS occupied, created_at, updated_at
            FROM rooms
            WHERE ($1::BOOLEAN IS NULL OR {OCCUPIED} = $1)
            ORDER BY name ASC
            "#
        );

        let rooms = sqlx::query_as::<_, Room>(&sql)
            .bind(occupied)
            .fetch_all(&self.pool)
            .await?;

        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Room>> {
        let sql = format!(
            r#"
            SELECT id, room_type_id, name, floor, facility_ids, notes,
                   {OCCUPIED} AS occupied, created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#
        );

        let room = sqlx::query_as::<_, Room>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(room)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateRoomRequest,
    ) -> DatabaseResult<Option<Room>> {
        let sql = format!(
            r#"
            UPDATE rooms
            SET room_type_id = COALESCE($2, room_type_id),
                name = COALESCE($3, name),
                floor = COALESCE($4, floor),
                facility_ids = COALESCE($5, facility_ids),
                notes = COALESCE($6, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, room_type_id, name, floor, facility_ids, notes,
                      {OCCUPIED} AS occupied, created_at, updated_at
            "#
        );

        let room = sqlx::query_as::<_, Room>(&sql)
            .bind(id)
            .bind(payload.room_type_id)
            .bind(payload.name.as_deref().map(str::trim))
            .bind(payload.floor)
            .bind(&payload.facility_ids)
            .bind(&payload.notes)
            .fetch_optional(&self.pool)
            .await?;

        Ok(room)
    }

    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
