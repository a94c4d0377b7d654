//! Repository for the `menu` table.

use aio_core::types::DbId;
use sqlx::PgPool;

use crate::models::dish::Dish;

/// Provides menu membership and the joined dish listing.
pub struct MenuRepo;

impl MenuRepo {
    /// Put `dish_id` on the menu, returning the entry id.
    pub async fn add(pool: &PgPool, dish_id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO menu (dish_id) VALUES ($1) RETURNING id")
            .bind(dish_id)
            .fetch_optional(pool)
            .await
    }

    /// Every dish joined through the menu, in menu entry order.
    ///
    /// A dish added to the menu twice appears twice.
    pub async fn list_dishes(pool: &PgPool) -> Result<Vec<Dish>, sqlx::Error> {
        sqlx::query_as::<_, Dish>(
            "SELECT d.id, d.name, d.description, d.price, d.category_id, d.changed_at, d.changed_by
             FROM dishes d
             JOIN menu m ON m.dish_id = d.id
             ORDER BY m.id",
        )
        .fetch_all(pool)
        .await
    }
}
