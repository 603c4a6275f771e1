//! API error taxonomy and its HTTP mapping.
//!
//! Every failure a handler can produce funnels through [`ApiError`];
//! the `IntoResponse` impl is the single place a status code and the
//! `{"error": {code, message}}` body get built. Nothing else writes
//! error bodies, so a 404 can never carry a success-shaped payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shiplog_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed boundary checks
    #[error("validation failed: {0}")]
    Validation(String),

    /// Entity missing, or present but outside the caller's scope
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or malformed credentials, bad token, or failed login
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Referenced parent entity exists outside the caller's ownership
    #[error("not owned: {0}")]
    NotOwned(String),

    /// Uniqueness clash, currently only the signup username
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) | Self::NotOwned(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotOwned(_) => "NOT_OWNED",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Message safe to put on the wire; server-side detail goes to the log.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Unauthorized(msg)
            | Self::NotOwned(msg)
            | Self::Conflict(msg) => msg.clone(),
            Self::Internal(err) => {
                error!("internal error: {err:?}");
                "An internal error occurred".to_string()
            }
            Self::Database(err) => {
                error!("database error: {err:?}");
                "A database error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.public_message(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
