//! Repository for the `categories` table.

use aio_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, changed_at, changed_by";

/// Provides insert and lookup for dish categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category, returning its id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategory,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO categories (name, changed_by) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.name)
        .bind(input.changed_by)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
