//! Starter data for a freshly created database.

use aio_core::types::{DbId, ManagerId};
use futures::future::try_join_all;
use rust_decimal::Decimal;

use crate::accounts::{AccountManager, LocalManager, RemoteManager};
use crate::error::DbError;
use crate::models::category::CreateCategory;
use crate::models::dish::CreateDish;
use crate::models::tree::{self, CreateTree};
use crate::models::user::NewManager;
use crate::Store;

/// Dishes created per leaf category.
pub const DISHES_PER_CATEGORY: usize = 100;

/// Ids and tokens created by [`starter_pack`].
#[derive(Debug, Clone)]
pub struct StarterPack {
    pub admin: ManagerId,
    pub admin_token: String,
    pub guest: ManagerId,
    pub guest_token: String,
    pub tree: DbId,
    pub dishes: Vec<DbId>,
}

/// Load the initial data set.
///
/// Creates local user `admin` and remote user `guest` (password equal to the
/// login), a tea category with white and green children, the tree for that
/// hierarchy, and [`DISHES_PER_CATEGORY`] menu dishes under each child.
/// Dish inserts run concurrently once the categories and tree exist.
pub async fn starter_pack(store: &Store) -> Result<StarterPack, DbError> {
    let local = LocalManager::new(store.clone());
    let remote = RemoteManager::new(store.clone());

    let admin = local
        .create_local_user("admin", "admin", &manager("Admin"))
        .await?;
    let admin_token = local.create_token(admin).await?;
    let guest = local
        .create_remote_user("guest", "guest", &manager("Guest"))
        .await?;
    let guest_token = remote.create_token(guest).await?;

    let tea = local.add_category(&category("Tea", admin)).await?;
    let white = local.add_category(&category("White", admin)).await?;
    let green = local.add_category(&category("Green", admin)).await?;
    let tree = local
        .add_tree(&CreateTree {
            tree: tree::single_level(tea, &[white, green]),
            changed_by: admin,
        })
        .await?;

    let names = (0..DISHES_PER_CATEGORY).flat_map(|i| {
        [
            (format!("green_{i}"), green),
            (format!("white_{i}"), white),
        ]
    });
    let dishes = try_join_all(
        names.map(|(name, category_id)| menu_dish(&local, name, category_id, admin)),
    )
    .await?;

    tracing::info!(dishes = dishes.len(), tree, "Starter data loaded");

    Ok(StarterPack {
        admin,
        admin_token,
        guest,
        guest_token,
        tree,
        dishes,
    })
}

/// Create a dish priced at one unit and put it on the menu.
async fn menu_dish(
    local: &LocalManager,
    name: String,
    category_id: DbId,
    changed_by: ManagerId,
) -> Result<DbId, DbError> {
    let dish = local
        .add_dish(&CreateDish {
            description: name.clone(),
            name,
            price: Decimal::ONE,
            category_id,
            changed_by,
        })
        .await?;
    local.add_dish_to_menu(dish).await?;
    Ok(dish)
}

fn manager(name: &str) -> NewManager {
    NewManager {
        name: name.to_owned(),
    }
}

fn category(name: &str, changed_by: ManagerId) -> CreateCategory {
    CreateCategory {
        name: name.to_owned(),
        changed_by,
    }
}
