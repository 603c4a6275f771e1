//! Product service
//!
//! All operations take the authenticated owner's id; the repository
//! folds it into every query.

use crate::error::ApiError;
use crate::repositories::{ProductRecord, ProductRepository};
use shiplog_shared::validation::validate_product_name;
use sqlx::PgPool;
use uuid::Uuid;

/// Product service for ownership-scoped CRUD
pub struct ProductService;

impl ProductService {
    /// List the caller's products
    pub async fn list(pool: &PgPool, owner_id: Uuid) -> Result<Vec<ProductRecord>, ApiError> {
        ProductRepository::list_for_owner(pool, owner_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Get one product by id under the caller's ownership
    pub async fn get(pool: &PgPool, owner_id: Uuid, id: Uuid) -> Result<ProductRecord, ApiError> {
        ProductRepository::find_by_id(pool, id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Product is not found".to_string()))
    }

    /// Create a product owned by the caller
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        name: &str,
    ) -> Result<ProductRecord, ApiError> {
        validate_product_name(name).map_err(ApiError::Validation)?;

        ProductRepository::create(pool, name, owner_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Rename a product matched by the compound key
    pub async fn update(
        pool: &PgPool,
        owner_id: Uuid,
        id: Uuid,
        name: &str,
    ) -> Result<ProductRecord, ApiError> {
        validate_product_name(name).map_err(ApiError::Validation)?;

        ProductRepository::update_name(pool, id, owner_id, name)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Product is not found".to_string()))
    }

    /// Delete a product matched by the compound key
    pub async fn delete(pool: &PgPool, owner_id: Uuid, id: Uuid) -> Result<ProductRecord, ApiError> {
        ProductRepository::delete(pool, id, owner_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Product is not found".to_string()))
    }
}
