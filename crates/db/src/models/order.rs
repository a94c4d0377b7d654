//! Order model and DTO.

use aio_core::types::{DbId, ManagerId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub manager_id: ManagerId,
    pub tree_id: DbId,
    pub payload: Value,
    pub ordered_at: Timestamp,
}

/// DTO for storing an order placed by a remote manager.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub manager_id: ManagerId,
    pub tree_id: DbId,
    pub payload: Value,
    pub ordered_at: Timestamp,
}
