//! Signup and signin.
//!
//! Both paths end by issuing a token; neither creates any server-side
//! session. Hashing and verification run on the blocking thread pool.

use crate::auth::{password, JwtService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use shiplog_shared::validation::{validate_password, validate_username};
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    /// Create a user and hand back a token for it.
    pub async fn signup(
        pool: &PgPool,
        jwt: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        validate_username(username).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        let password_hash = password::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, username, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        jwt.issue(user.id, &user.username).map_err(ApiError::Internal)
    }

    /// Check credentials and hand back a token.
    ///
    /// An unknown username and a wrong password produce the same
    /// response, so the endpoint cannot be used to enumerate accounts.
    pub async fn signin(
        pool: &PgPool,
        jwt: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let bad_credentials =
            || ApiError::Unauthorized("Invalid username or password".to_string());

        let user = UserRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(bad_credentials)?;

        let valid = password::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(bad_credentials());
        }

        jwt.issue(user.id, &user.username).map_err(ApiError::Internal)
    }
}
