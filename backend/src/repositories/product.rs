//! Product repository for database operations
//!
//! Every query here is scoped by the owner id. Mutations match on the
//! compound key `(id, belongs_to_id)`, so a request carrying a valid id
//! owned by someone else matches zero rows and surfaces as not-found.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Product record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub belongs_to_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Product repository for database operations
pub struct ProductRepository;

impl ProductRepository {
    /// List all products owned by a user, in creation order
    pub async fn list_for_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<ProductRecord>> {
        let records = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, belongs_to_id, created_at
            FROM products
            WHERE belongs_to_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a product by its compound key
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<ProductRecord>> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, belongs_to_id, created_at
            FROM products
            WHERE id = $1 AND belongs_to_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a new product owned by a user
    pub async fn create(pool: &PgPool, name: &str, owner_id: Uuid) -> Result<ProductRecord> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            INSERT INTO products (name, belongs_to_id)
            VALUES ($1, $2)
            RETURNING id, name, belongs_to_id, created_at
            "#,
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Rename a product matched by its compound key
    ///
    /// Returns None when no owned row matches; an id owned by another
    /// user is indistinguishable from a missing one.
    pub async fn update_name(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
        name: &str,
    ) -> Result<Option<ProductRecord>> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            UPDATE products
            SET name = $3
            WHERE id = $1 AND belongs_to_id = $2
            RETURNING id, name, belongs_to_id, created_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a product matched by its compound key, returning the deleted row
    pub async fn delete(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<ProductRecord>> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            DELETE FROM products
            WHERE id = $1 AND belongs_to_id = $2
            RETURNING id, name, belongs_to_id, created_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
