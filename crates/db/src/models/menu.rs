//! Menu as seen by remote managers.

use aio_core::types::DbId;
use serde::Serialize;

use crate::models::dish::Dish;

/// Every dish on the menu plus the tree snapshot to order against.
#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    pub dishes: Vec<Dish>,
    /// `None` until a tree has been stored.
    pub tree_id: Option<DbId>,
}
