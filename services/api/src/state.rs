//! Application state shared across handlers

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    jwt::JwtService,
    repositories::{
        FacilityRepository, FinanceRepository, RentRepository, ReportRepository,
        RoomRepository, RoomTypeRepository, TenantRepository, UserStore,
    },
    services::UsersService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    /// Key expected in the `x-api-key` header
    pub api_key: Arc<str>,
    pub upload_dir: Arc<PathBuf>,
    pub max_upload_bytes: usize,
    pub users_service: UsersService,
    pub tenant_repository: TenantRepository,
    pub room_type_repository: RoomTypeRepository,
    pub facility_repository: FacilityRepository,
    pub room_repository: RoomRepository,
    pub rent_repository: RentRepository,
    pub finance_repository: FinanceRepository,
    pub report_repository: ReportRepository,
}

impl AppState {
    /// Wire every repository onto `db_pool`; users go through `user_store`
    pub fn new(
        db_pool: PgPool,
        jwt_service: JwtService,
        user_store: Arc<dyn UserStore>,
        api_key: &str,
        upload_dir: PathBuf,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            users_service: UsersService::new(user_store, jwt_service.clone()),
            tenant_repository: TenantRepository::new(db_pool.clone()),
            room_type_repository: RoomTypeRepository::new(db_pool.clone()),
            facility_repository: FacilityRepository::new(db_pool.clone()),
            room_repository: RoomRepository::new(db_pool.clone()),
            rent_repository: RentRepository::new(db_pool.clone()),
            finance_repository: FinanceRepository::new(db_pool.clone()),
            report_repository: ReportRepository::new(db_pool.clone()),
            db_pool,
            jwt_service,
            api_key: Arc::from(api_key),
            upload_dir: Arc::new(upload_dir),
            max_upload_bytes,
        }
    }
}
