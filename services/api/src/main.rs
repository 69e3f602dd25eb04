use std::sync::Arc;

use anyhow::Result;
use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rental_api::{
    AppState,
    config::Settings,
    create_router,
    jwt::{JwtConfig, JwtService},
    repositories::PgUserStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting rental API service");

    let settings = Settings::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool).await?;

    let jwt_service = JwtService::new(JwtConfig::from_env()?)?;

    tokio::fs::create_dir_all(&settings.upload_dir).await?;

    let app_state = AppState::new(
        pool.clone(),
        jwt_service,
        Arc::new(PgUserStore::new(pool)),
        &settings.api_key,
        settings.upload_dir.clone(),
        settings.max_upload_bytes,
    );

    if let Some(seed) = settings.admin_seed() {
        app_state.users_service.ensure_user(&seed).await?;
    } else {
        warn!("APP_ADMIN_EMAIL or APP_ADMIN_PASSWORD not set, no seed account created");
    }

    // Start the web server
    let app = create_router(app_state);

    let address = settings.bind_address()?;
    let listener = TcpListener::bind(address).await?;
    info!("Rental API service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Rental API service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
