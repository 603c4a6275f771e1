//! Probe endpoints: `/health`, `/health/ready`, `/health/live`.
//!
//! Readiness is the only probe with a dependency: it answers 503 when
//! the database does not respond.

use crate::db;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "version": VERSION }))
}

/// GET /health/live
pub async fn liveness_check() -> Json<Value> {
    Json(json!({ "status": "alive", "version": VERSION }))
}

/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match db::ping(state.db()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "version": VERSION,
                "checks": { "database": { "status": "healthy" } },
            })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "version": VERSION,
                "checks": { "database": { "status": "unhealthy", "message": err.to_string() } },
            })),
        ),
    }
}
