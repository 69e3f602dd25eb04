//! Service settings loaded from `APP_*` environment variables

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Account created at startup when no user with the same email exists
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// HTTP service settings
///
/// # Environment Variables
/// - `APP_HOST`: Bind address (default: "0.0.0.0")
/// - `APP_PORT`: Bind port (default: 3000)
/// - `APP_API_KEY`: Key every non-public request must present in `x-api-key`
/// - `APP_UPLOAD_DIR`: Directory uploaded files are written to (default: "./uploads")
/// - `APP_MAX_UPLOAD_BYTES`: Request body limit for uploads (default: 10 MiB)
/// - `APP_ADMIN_NAME`, `APP_ADMIN_EMAIL`, `APP_ADMIN_PASSWORD`: optional seed account
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub admin_name: Option<String>,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("upload_dir", "./uploads")?
            .set_default("max_upload_bytes", 10 * 1024 * 1024)?
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.api_key.trim().is_empty() {
            return Err(ConfigError::Message("APP_API_KEY must not be empty".to_string()));
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid bind address: {}", e)))
    }

    /// Seed account, present only when both email and password are configured
    pub fn admin_seed(&self) -> Option<AdminSeed> {
        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => Some(AdminSeed {
                name: self
                    .admin_name
                    .clone()
                    .unwrap_or_else(|| "Administrator".to_string()),
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}
