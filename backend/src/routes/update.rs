//! Update API routes
//!
//! Updates are addressed by id on the wire but always resolved through
//! the caller's products in the data layer.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::UpdateRecord;
use crate::services::UpdateService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use shiplog_shared::models::UpdateStatus;
use shiplog_shared::types::{
    CreateUpdateRequest, DataResponse, PutUpdateRequest, UpdateResponse,
};
use uuid::Uuid;

/// Create update routes
pub fn update_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_update).get(list_updates))
        .route(
            "/:id",
            get(get_update).put(put_update).delete(delete_update),
        )
}

fn to_response(record: UpdateRecord) -> ApiResult<UpdateResponse> {
    // The status column is constrained to the enum's values; a mismatch
    // means the store and the code disagree.
    let status = record
        .status
        .parse::<UpdateStatus>()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

    Ok(UpdateResponse {
        id: record.id.to_string(),
        title: record.title,
        body: record.body,
        version: record.version,
        asset: record.asset,
        status,
        product_id: record.product_id.to_string(),
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

/// GET /api/update - List updates across all of the caller's products
async fn list_updates(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DataResponse<Vec<UpdateResponse>>>> {
    let records = UpdateService::list(state.db(), auth.user_id).await?;
    let updates = records
        .into_iter()
        .map(to_response)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(DataResponse::new(updates)))
}

/// GET /api/update/:id - Get one update
async fn get_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DataResponse<UpdateResponse>>> {
    let record = UpdateService::get(state.db(), auth.user_id, id).await?;
    Ok(Json(DataResponse::new(to_response(record)?)))
}

/// POST /api/update - Create an update against an owned product
async fn create_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUpdateRequest>,
) -> ApiResult<Json<DataResponse<UpdateResponse>>> {
    let record = UpdateService::create(state.db(), auth.user_id, req).await?;
    Ok(Json(DataResponse::new(to_response(record)?)))
}

/// PUT /api/update/:id - Merge supplied fields into an update
async fn put_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PutUpdateRequest>,
) -> ApiResult<Json<DataResponse<UpdateResponse>>> {
    let record = UpdateService::update(state.db(), auth.user_id, id, req).await?;
    Ok(Json(DataResponse::new(to_response(record)?)))
}

/// DELETE /api/update/:id - Delete an update, returning the deleted record
async fn delete_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DataResponse<UpdateResponse>>> {
    let record = UpdateService::delete(state.db(), auth.user_id, id).await?;
    Ok(Json(DataResponse::new(to_response(record)?)))
}
