//! Tenant repository for database operations

use common::error::DatabaseResult;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateTenantRequest, Tenant, UpdateTenantRequest};

/// Tenant repository for database operations
#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a tenant
    pub async fn create(&self, payload: &CreateTenantRequest) -> DatabaseResult<Tenant> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (name, phone, email, id_card_number, id_card_file, address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, phone, email, id_card_number, id_card_file, address,
                      created_at, updated_at
            "#,
        )
        .bind(payload.name.trim())
        .bind(&payload.phone)
        .bind(&payload.email)
        .bind(&payload.id_card_number)
        .bind(&payload.id_card_file)
        .bind(&payload.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(tenant)
    }

    /// Get all tenants ordered by name
    pub async fn get_all(&self) -> DatabaseResult<Vec<Tenant>> {
        let tenants = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT id, name, phone, email, id_card_number, id_card_file, address,
                   created_at, updated_at
            FROM tenants
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tenants)
    }

    /// Find a tenant by ID
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Tenant>> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT id, name, phone, email, id_card_number, id_card_file, address,
                   created_at, updated_at
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tenant)
    }

    /// Update the present fields of a tenant
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateTenantRequest,
    ) -> DatabaseResult<Option<Tenant>> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            UPDATE tenants
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                id_card_number = COALESCE($5, id_card_number),
                id_card_file = COALESCE($6, id_card_file),
                address = COALESCE($7, address),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, phone, email, id_card_number, id_card_file, address,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref().map(str::trim))
        .bind(&payload.phone)
        .bind(&payload.email)
        .bind(&payload.id_card_number)
        .bind(&payload.id_card_file)
        .bind(&payload.address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tenant)
    }

    /// Delete a tenant by ID
    pub async fn delete(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
