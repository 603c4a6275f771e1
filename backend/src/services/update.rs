//! Update service
//!
//! Updates are reached through the owning product: creation verifies the
//! referenced product belongs to the caller, and every other operation
//! re-derives the `update -> product -> owner` chain inside the query.

use crate::error::ApiError;
use crate::repositories::{
    CreateUpdate, ProductRepository, UpdateChanges, UpdateRecord, UpdateRepository,
};
use shiplog_shared::types::{CreateUpdateRequest, PutUpdateRequest};
use shiplog_shared::validation::{validate_update_body, validate_update_title, validate_version};
use sqlx::PgPool;
use uuid::Uuid;

/// Update service for product-scoped CRUD
pub struct UpdateService;

impl UpdateService {
    /// List all updates across the caller's products
    pub async fn list(pool: &PgPool, owner_id: Uuid) -> Result<Vec<UpdateRecord>, ApiError> {
        UpdateRepository::list_for_owner(pool, owner_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Get one update reachable through the caller's products
    pub async fn get(pool: &PgPool, owner_id: Uuid, id: Uuid) -> Result<UpdateRecord, ApiError> {
        UpdateRepository::find_by_id(pool, id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Update is not found".to_string()))
    }

    /// Create an update against a product the caller owns
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        req: CreateUpdateRequest,
    ) -> Result<UpdateRecord, ApiError> {
        validate_update_title(&req.title).map_err(ApiError::Validation)?;
        validate_update_body(&req.body).map_err(ApiError::Validation)?;
        if let Some(version) = &req.version {
            validate_version(version).map_err(ApiError::Validation)?;
        }

        let product_id = Uuid::parse_str(&req.product_id)
            .map_err(|_| ApiError::Validation("Invalid product id".to_string()))?;

        // The referenced parent must be under the caller's ownership
        let product = ProductRepository::find_by_id(pool, product_id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotOwned("Product does not belong to you".to_string()))?;

        let status = req.status.unwrap_or_default();

        UpdateRepository::create(
            pool,
            CreateUpdate {
                product_id: product.id,
                title: req.title,
                body: req.body,
                version: req.version,
                asset: req.asset,
                status: status.as_str().to_string(),
            },
        )
        .await
        .map_err(ApiError::Internal)
    }

    /// Merge supplied fields into an update under the caller's products
    pub async fn update(
        pool: &PgPool,
        owner_id: Uuid,
        id: Uuid,
        req: PutUpdateRequest,
    ) -> Result<UpdateRecord, ApiError> {
        if let Some(title) = &req.title {
            validate_update_title(title).map_err(ApiError::Validation)?;
        }
        if let Some(body) = &req.body {
            validate_update_body(body).map_err(ApiError::Validation)?;
        }
        if let Some(version) = &req.version {
            validate_version(version).map_err(ApiError::Validation)?;
        }

        let changes = UpdateChanges {
            title: req.title,
            body: req.body,
            version: req.version,
            asset: req.asset,
            status: req.status.map(|s| s.as_str().to_string()),
        };

        UpdateRepository::update(pool, id, owner_id, changes)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Update is not found".to_string()))
    }

    /// Delete an update under the caller's products
    pub async fn delete(pool: &PgPool, owner_id: Uuid, id: Uuid) -> Result<UpdateRecord, ApiError> {
        UpdateRepository::delete(pool, id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Update is not found".to_string()))
    }
}
