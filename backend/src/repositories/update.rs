//! Update repository for database operations
//!
//! Updates carry no owner column; reachability is derived through the
//! owning product on every query (`updates -> products -> belongs_to_id`).
//! An update under someone else's product matches zero rows and surfaces
//! as not-found, same as the compound-key behavior on products.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Update record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UpdateRecord {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub version: Option<String>,
    pub asset: Option<String>,
    pub status: String,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an update
#[derive(Debug, Clone)]
pub struct CreateUpdate {
    pub product_id: Uuid,
    pub title: String,
    pub body: String,
    pub version: Option<String>,
    pub asset: Option<String>,
    pub status: String,
}

/// Field changes for a partial update; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub version: Option<String>,
    pub asset: Option<String>,
    pub status: Option<String>,
}

/// Update repository for database operations
pub struct UpdateRepository;

impl UpdateRepository {
    /// List all updates across a user's products
    ///
    /// Ordered by product creation, then update creation within each
    /// product (product iteration order, not an independent sort).
    pub async fn list_for_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<UpdateRecord>> {
        let records = sqlx::query_as::<_, UpdateRecord>(
            r#"
            SELECT u.id, u.title, u.body, u.version, u.asset, u.status,
                   u.product_id, u.created_at, u.updated_at
            FROM updates u
            JOIN products p ON p.id = u.product_id
            WHERE p.belongs_to_id = $1
            ORDER BY p.created_at, u.created_at
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get an update by id, scoped through the owning product
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<UpdateRecord>> {
        let record = sqlx::query_as::<_, UpdateRecord>(
            r#"
            SELECT u.id, u.title, u.body, u.version, u.asset, u.status,
                   u.product_id, u.created_at, u.updated_at
            FROM updates u
            JOIN products p ON p.id = u.product_id
            WHERE u.id = $1 AND p.belongs_to_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a new update against a product
    ///
    /// Callers verify product ownership first; this insert itself is a
    /// single atomic statement.
    pub async fn create(pool: &PgPool, input: CreateUpdate) -> Result<UpdateRecord> {
        let record = sqlx::query_as::<_, UpdateRecord>(
            r#"
            INSERT INTO updates (product_id, title, body, version, asset, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, body, version, asset, status,
                      product_id, created_at, updated_at
            "#,
        )
        .bind(input.product_id)
        .bind(&input.title)
        .bind(&input.body)
        .bind(&input.version)
        .bind(&input.asset)
        .bind(&input.status)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Merge field changes into an update, resetting `updated_at`
    ///
    /// Matched through the owning-product join; returns None when the id
    /// does not resolve to an update under one of the caller's products.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
        changes: UpdateChanges,
    ) -> Result<Option<UpdateRecord>> {
        let record = sqlx::query_as::<_, UpdateRecord>(
            r#"
            UPDATE updates u
            SET title = COALESCE($3, u.title),
                body = COALESCE($4, u.body),
                version = COALESCE($5, u.version),
                asset = COALESCE($6, u.asset),
                status = COALESCE($7, u.status),
                updated_at = NOW()
            FROM products p
            WHERE u.id = $1 AND u.product_id = p.id AND p.belongs_to_id = $2
            RETURNING u.id, u.title, u.body, u.version, u.asset, u.status,
                      u.product_id, u.created_at, u.updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.body)
        .bind(changes.version)
        .bind(changes.asset)
        .bind(changes.status)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete an update matched through the owning product, returning the
    /// deleted row
    pub async fn delete(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<UpdateRecord>> {
        let record = sqlx::query_as::<_, UpdateRecord>(
            r#"
            DELETE FROM updates u
            USING products p
            WHERE u.id = $1 AND u.product_id = p.id AND p.belongs_to_id = $2
            RETURNING u.id, u.title, u.body, u.version, u.asset, u.status,
                      u.product_id, u.created_at, u.updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
