//! Repository for the `orders` table.

use aio_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order};

const COLUMNS: &str = "id, manager_id, tree_id, payload, ordered_at";

/// Provides insert and listing for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert an order, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO orders (manager_id, tree_id, payload, ordered_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.manager_id)
        .bind(input.tree_id)
        .bind(&input.payload)
        .bind(input.ordered_at)
        .fetch_optional(pool)
        .await
    }

    /// Up to `limit` orders, earliest `ordered_at` first.
    pub async fn list_by_ordered_at(pool: &PgPool, limit: i64) -> Result<Vec<Order>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM orders ORDER BY ordered_at ASC, id ASC LIMIT $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
