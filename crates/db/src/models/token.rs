//! Session token models.

use aio_core::types::{ManagerId, Timestamp};
use sqlx::FromRow;

/// A token row matched for some role, with the store's clock at lookup time.
///
/// `checked_at` comes from the same query so age is measured on one clock.
#[derive(Debug, Clone, FromRow)]
pub struct TokenMatch {
    pub manager_id: ManagerId,
    pub inserted_at: Timestamp,
    pub checked_at: Timestamp,
}
