//! Repository for the `trees` table.

use aio_core::types::DbId;
use sqlx::PgPool;

use crate::models::tree::{CreateTree, Tree};

const COLUMNS: &str = "id, tree, changed_at, changed_by";

/// Provides insert and lookup for category tree snapshots.
pub struct TreeRepo;

impl TreeRepo {
    /// Insert a tree snapshot, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateTree) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO trees (tree, changed_by) VALUES ($1, $2) RETURNING id")
            .bind(&input.tree)
            .bind(input.changed_by)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tree>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trees WHERE id = $1");
        sqlx::query_as::<_, Tree>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Id of the tree orders are placed against: the lowest id stored.
    pub async fn current_id(pool: &PgPool) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM trees ORDER BY id ASC LIMIT 1")
            .fetch_optional(pool)
            .await
    }
}
