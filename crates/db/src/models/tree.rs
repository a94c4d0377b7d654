//! Category tree snapshots.

use aio_core::types::{DbId, ManagerId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `trees` table.
///
/// `tree` maps category ids (as strings) to their children in the same
/// shape; leaves map to `null`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tree {
    pub id: DbId,
    pub tree: Value,
    pub changed_at: Timestamp,
    pub changed_by: ManagerId,
}

/// DTO for storing a new tree snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTree {
    pub tree: Value,
    pub changed_by: ManagerId,
}

/// Build a one-level tree: `root` with `leaves` as its children.
pub fn single_level(root: DbId, leaves: &[DbId]) -> Value {
    let children: Map<String, Value> = leaves
        .iter()
        .map(|id| (id.to_string(), Value::Null))
        .collect();
    let mut tree = Map::new();
    tree.insert(root.to_string(), Value::Object(children));
    Value::Object(tree)
}
