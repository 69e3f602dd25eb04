//! JWT service for access token generation and validation
//!
//! Tokens are signed with RS256. The private key only lives in this service;
//! the public key is enough to validate tokens elsewhere.

use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Private key for signing tokens
    pub private_key: String,
    /// Public key for verifying tokens
    pub public_key: String,
    /// Access token expiration time in seconds (default: 15 minutes)
    pub access_token_expiry: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_PRIVATE_KEY`: Private key for signing tokens (PEM format) or path to private key file
    /// - `JWT_PUBLIC_KEY`: Public key for verifying tokens (PEM format) or path to public key file
    /// - `JWT_ACCESS_TOKEN_EXPIRY`: Access token expiry in seconds (default: 900)
    pub fn from_env() -> Result<Self> {
        let private_key = std::env::var("JWT_PRIVATE_KEY")
            .map_err(|_| anyhow::anyhow!("JWT_PRIVATE_KEY environment variable not set"))?;
        let public_key = std::env::var("JWT_PUBLIC_KEY")
            .map_err(|_| anyhow::anyhow!("JWT_PUBLIC_KEY environment variable not set"))?;

        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "900".to_string()) // 15 minutes
            .parse()
            .unwrap_or(900);

        Ok(JwtConfig {
            private_key: load_pem(&private_key, "private")?,
            public_key: load_pem(&public_key, "public")?,
            access_token_expiry,
        })
    }
}

/// Accept either inline PEM or a path to a PEM file (CWD first, then crate root)
fn load_pem(value: &str, kind: &str) -> Result<String> {
    if value.starts_with("-----BEGIN") {
        return Ok(value.to_string());
    }

    let pem = std::fs::read_to_string(value)
        .or_else(|_| {
            let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            path.push(value);
            std::fs::read_to_string(path)
        })
        .map_err(|e| anyhow::anyhow!("Failed to read {} key file: {}", kind, e))?;

    Ok(pem.trim().to_string())
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// User email at the time of issue
    pub email: String,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())?;
        let decoding_key = DecodingKey::from_rsa_pem(config.public_key.as_bytes())?;
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;

        Ok(JwtService {
            encoding_key,
            decoding_key,
            validation,
            config,
        })
    }

    /// Generate an access token for a user
    pub fn generate_access_token(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now,
            exp: now.saturating_add(self.config.access_token_expiry),
        };

        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Get the access token expiry time
    pub fn access_token_expiry(&self) -> u64 {
        self.config.access_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const PRIVATE_KEY: &str = include_str!("../tests/fixtures/jwt_private.pem");
    const PUBLIC_KEY: &str = include_str!("../tests/fixtures/jwt_public.pem");

    fn service() -> JwtService {
        JwtService::new(JwtConfig {
            private_key: PRIVATE_KEY.to_string(),
            public_key: PUBLIC_KEY.to_string(),
            access_token_expiry: 900,
        })
        .unwrap()
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Rina".to_string(),
            email: "rina@example.com".to_string(),
            phone: None,
            password_hash: "unused".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip_keeps_subject() {
        let service = service();
        let user = user();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "old@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &EncodingKey::from_rsa_pem(PRIVATE_KEY.as_bytes()).unwrap(),
        )
        .unwrap();

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_huge_expiry_saturates() {
        let service = JwtService::new(JwtConfig {
            private_key: PRIVATE_KEY.to_string(),
            public_key: PUBLIC_KEY.to_string(),
            access_token_expiry: u64::MAX,
        })
        .unwrap();

        let token = service.generate_access_token(&user()).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.exp, u64::MAX);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = service();
        let mut token = service.generate_access_token(&user()).unwrap();
        token.push('x');

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    #[serial]
    fn test_jwt_config_from_env_reads_key_files() {
        unsafe {
            std::env::set_var("JWT_PRIVATE_KEY", "tests/fixtures/jwt_private.pem");
            std::env::set_var("JWT_PUBLIC_KEY", PUBLIC_KEY);
            std::env::remove_var("JWT_ACCESS_TOKEN_EXPIRY");
        }

        let config = JwtConfig::from_env().unwrap();
        assert!(config.private_key.starts_with("-----BEGIN"));
        assert_eq!(config.access_token_expiry, 900);

        unsafe {
            std::env::remove_var("JWT_PRIVATE_KEY");
            std::env::remove_var("JWT_PUBLIC_KEY");
        }
    }
}
