//! Product API routes
//!
//! Every handler extracts `AuthUser` first; the data layer never sees a
//! request without an owner id.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::ProductRecord;
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use shiplog_shared::types::{
    CreateProductRequest, DataResponse, ProductResponse, UpdateProductRequest,
};
use uuid::Uuid;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn to_response(record: ProductRecord) -> ProductResponse {
    ProductResponse {
        id: record.id.to_string(),
        name: record.name,
        belongs_to_id: record.belongs_to_id.to_string(),
        created_at: record.created_at,
    }
}

/// GET /api/product - List the caller's products
async fn list_products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DataResponse<Vec<ProductResponse>>>> {
    let records = ProductService::list(state.db(), auth.user_id).await?;
    let products = records.into_iter().map(to_response).collect();
    Ok(Json(DataResponse::new(products)))
}

/// GET /api/product/:id - Get one product
async fn get_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DataResponse<ProductResponse>>> {
    let record = ProductService::get(state.db(), auth.user_id, id).await?;
    Ok(Json(DataResponse::new(to_response(record))))
}

/// POST /api/product - Create a product owned by the caller
async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<Json<DataResponse<ProductResponse>>> {
    let record = ProductService::create(state.db(), auth.user_id, &req.name).await?;
    Ok(Json(DataResponse::new(to_response(record))))
}

/// PUT /api/product/:id - Rename a product
async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Json<DataResponse<ProductResponse>>> {
    let record = ProductService::update(state.db(), auth.user_id, id, &req.name).await?;
    Ok(Json(DataResponse::new(to_response(record))))
}

/// DELETE /api/product/:id - Delete a product, returning the deleted record
async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DataResponse<ProductResponse>>> {
    let record = ProductService::delete(state.db(), auth.user_id, id).await?;
    Ok(Json(DataResponse::new(to_response(record))))
}
