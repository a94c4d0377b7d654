//! Remote (off-site) manager: reads the menu and places orders.

use aio_core::types::DbId;

use crate::accounts::AccountManager;
use crate::error::{required_id, DbError};
use crate::models::menu::Menu;
use crate::models::order::CreateOrder;
use crate::models::user::ManagerRole;
use crate::repositories::{MenuRepo, OrderRepo, TreeRepo};
use crate::Store;

#[derive(Debug, Clone)]
pub struct RemoteManager {
    store: Store,
}

impl RemoteManager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All menu dishes plus the tree snapshot orders should reference.
    pub async fn get_menu(&self) -> Result<Menu, DbError> {
        let pool = self.store.pool();
        let dishes = MenuRepo::list_dishes(pool).await?;
        let tree_id = TreeRepo::current_id(pool).await?;
        Ok(Menu { dishes, tree_id })
    }

    /// Record an order, returning its id.
    pub async fn store_order(&self, input: &CreateOrder) -> Result<DbId, DbError> {
        let id = OrderRepo::create(self.store.pool(), input).await?;
        let id = required_id(id, "orders")?;
        tracing::debug!(order_id = id, manager_id = input.manager_id, "Order stored");
        Ok(id)
    }
}

impl AccountManager for RemoteManager {
    fn store(&self) -> &Store {
        &self.store
    }

    fn role(&self) -> ManagerRole {
        ManagerRole::Remote
    }
}
