//! Users service: credential checks, token issuance and profile management

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    config::AdminSeed,
    error::{ApiError, ApiResult},
    jwt::JwtService,
    models::{
        DeleteResponse, NewUser, UpdateUser, UserDetailResponse, UserLoginRequest,
        UserLoginResponse, UserUpdateRequest,
    },
    password,
    repositories::UserStore,
    validation::{check, validate_email, validate_password, validate_phone, validate_required},
};

const BAD_CREDENTIALS: &str = "Email or password is incorrect";
const USER_NOT_FOUND: &str = "User not found";

/// Users service
#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn UserStore>,
    jwt_service: JwtService,
}

impl UsersService {
    /// Create a new users service
    pub fn new(store: Arc<dyn UserStore>, jwt_service: JwtService) -> Self {
        Self { store, jwt_service }
    }

    /// Check credentials and issue an access token
    pub async fn sign_in(&self, request: UserLoginRequest) -> ApiResult<UserLoginResponse> {
        let email = request.email.trim().to_lowercase();
        check([
            validate_email(&email),
            validate_required("Password", &request.password, 128),
        ])?;

        let Some(user) = self.store.find_by_email(&email).await? else {
            warn!("Login attempt for unknown email: {}", email);
            return Err(ApiError::not_found(BAD_CREDENTIALS));
        };

        let hash = user.password_hash.clone();
        let matches = blocking(move || password::verify_password(&hash, &request.password)).await?;
        if !matches {
            warn!("Login attempt with wrong password for user: {}", user.id);
            return Err(ApiError::not_found(BAD_CREDENTIALS));
        }

        let access_token = self.jwt_service.generate_access_token(&user).map_err(|e| {
            error!("Failed to generate access token: {}", e);
            ApiError::InternalServerError
        })?;

        info!("User {} logged in", user.id);

        Ok(UserLoginResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.access_token_expiry(),
        })
    }

    /// All users, oldest first
    pub async fn find_all(&self) -> ApiResult<Vec<UserDetailResponse>> {
        let users = self.store.find_all().await?;
        Ok(users.into_iter().map(UserDetailResponse::from).collect())
    }

    pub async fn find_one(&self, id: Uuid) -> ApiResult<UserDetailResponse> {
        self.store
            .find_by_id(id)
            .await?
            .map(UserDetailResponse::from)
            .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))
    }

    /// Update the supplied fields; a new password is re-hashed
    pub async fn update(
        &self,
        id: Uuid,
        request: UserUpdateRequest,
    ) -> ApiResult<UserDetailResponse> {
        let email = request.email.as_deref().map(|e| e.trim().to_lowercase());

        check([
            request
                .name
                .as_deref()
                .map_or(Ok(()), |name| validate_required("Name", name, 100)),
            email.as_deref().map_or(Ok(()), validate_email),
            request.phone.as_deref().map_or(Ok(()), validate_phone),
            request.password.as_deref().map_or(Ok(()), validate_password),
        ])?;

        if self.store.find_by_id(id).await?.is_none() {
            return Err(ApiError::not_found(USER_NOT_FOUND));
        }

        if let Some(email) = email.as_deref() {
            if let Some(owner) = self.store.find_by_email(email).await? {
                if owner.id != id {
                    return Err(ApiError::validation("Email is already in use"));
                }
            }
        }

        let password_hash = match request.password {
            Some(plain) => Some(blocking(move || password::hash_password(&plain)).await?),
            None => None,
        };

        let changes = UpdateUser {
            name: request.name.map(|n| n.trim().to_string()),
            email,
            phone: request.phone,
            password_hash,
        };

        self.store
            .update(id, &changes)
            .await?
            .map(UserDetailResponse::from)
            .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<DeleteResponse> {
        if self.store.delete(id).await? {
            info!("Deleted user {}", id);
            Ok(DeleteResponse::new(id, "User"))
        } else {
            Err(ApiError::not_found(USER_NOT_FOUND))
        }
    }

    /// Create the configured seed account unless its email is already taken
    ///
    /// Returns whether a user was created.
    pub async fn ensure_user(&self, seed: &AdminSeed) -> ApiResult<bool> {
        let email = seed.email.trim().to_lowercase();
        check([
            validate_required("Name", &seed.name, 100),
            validate_email(&email),
            validate_password(&seed.password),
        ])?;

        if self.store.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }

        let plain = seed.password.clone();
        let password_hash = blocking(move || password::hash_password(&plain)).await?;

        let user = self
            .store
            .create(&NewUser {
                name: seed.name.trim().to_string(),
                email,
                phone: None,
                password_hash,
            })
            .await?;

        info!("Seeded user {} ({})", user.id, user.email);
        Ok(true)
    }
}

/// Run CPU-heavy password work off the async workers
async fn blocking<T, F>(work: F) -> ApiResult<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| {
            error!("Password task panicked: {}", e);
            ApiError::InternalServerError
        })?
        .map_err(|e| {
            error!("Password operation failed: {}", e);
            ApiError::InternalServerError
        })
}
