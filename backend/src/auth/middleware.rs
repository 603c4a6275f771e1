//! The authentication gate.
//!
//! `AuthUser` is an extractor: a handler that takes one only runs after
//! a `Bearer` token has been verified, so every data accessor downstream
//! starts from a known identity. A request failing any step stops here
//! with a 401 and never reaches a handler.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

/// Identity distilled from a verified token.
///
/// Lives for the duration of one request; nothing about it is persisted.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

fn reject(message: &str) -> ApiError {
    ApiError::Unauthorized(message.to_string())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| reject("Not authorized"))?;

        // Only the `Bearer <token>` form is accepted
        let token = match header.split_once(' ') {
            Some(("Bearer", token)) if !token.is_empty() => token,
            _ => return Err(reject("Not authorized")),
        };

        let state = AppState::from_ref(state);
        let claims = state
            .jwt()
            .verify(token)
            .map_err(|_| reject("Not valid token"))?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| reject("Not valid token"))?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
        })
    }
}
