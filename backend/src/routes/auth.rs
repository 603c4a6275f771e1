//! Authentication routes.
//!
//! Signup and signin both answer `{token}`; no server-side session is
//! created.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use shiplog_shared::types::{CredentialsRequest, TokenResponse};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// POST /api/auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::signup(state.db(), state.jwt(), &req.username, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth/signin
async fn signin(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::signin(state.db(), state.jwt(), &req.username, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}
