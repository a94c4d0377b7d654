//! Repository for the `dishes` table.

use aio_core::types::DbId;
use sqlx::PgPool;

use crate::models::dish::{CreateDish, Dish};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, price, category_id, changed_at, changed_by";

/// Provides insert and lookup for dishes.
pub struct DishRepo;

impl DishRepo {
    /// Insert a dish, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateDish) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO dishes (name, description, price, category_id, changed_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.category_id)
        .bind(input.changed_by)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dish>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dishes WHERE id = $1");
        sqlx::query_as::<_, Dish>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
