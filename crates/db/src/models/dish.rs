//! Dish model and DTO.

use aio_core::types::{DbId, ManagerId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dishes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dish {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: DbId,
    pub changed_at: Timestamp,
    pub changed_by: ManagerId,
}

/// DTO for creating a dish.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDish {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: DbId,
    pub changed_by: ManagerId,
}
