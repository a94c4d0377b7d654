//! Local (on-site) manager: administers users and the catalog.

use aio_core::password::hash_password;
use aio_core::types::{DbId, ManagerId};

use crate::accounts::AccountManager;
use crate::error::{is_unique_violation, required_id, DbError};
use crate::models::category::CreateCategory;
use crate::models::dish::CreateDish;
use crate::models::order::Order;
use crate::models::tree::CreateTree;
use crate::models::user::{CreateUser, ManagerRole, NewManager};
use crate::repositories::{
    CategoryRepo, DishRepo, ManagerRepo, MenuRepo, OrderRepo, TreeRepo, UserRepo,
};
use crate::Store;

#[derive(Debug, Clone)]
pub struct LocalManager {
    store: Store,
}

impl LocalManager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a user with a profile of `role`, returning the new manager id.
    ///
    /// The user row and the profile row are written in one transaction:
    /// either both exist afterwards or neither does.
    pub async fn create_user(
        &self,
        role: ManagerRole,
        login: &str,
        password: &str,
        profile: &NewManager,
    ) -> Result<ManagerId, DbError> {
        let digest = hash_password(password, None, &self.store.settings().hash_params());
        let input = CreateUser {
            login: login.to_owned(),
            password_hash: digest.hash,
            salt: digest.salt,
        };

        let mut tx = self.store.pool().begin().await?;

        let user_id = UserRepo::create(&mut tx, &input)
            .await
            .map_err(|e| {
                if is_unique_violation(&e, "uq_users_login") {
                    DbError::LoginTaken(input.login.clone())
                } else {
                    DbError::Database(e)
                }
            })?;
        let user_id = required_id(user_id, "users")?;

        let manager_id = ManagerRepo::create(&mut tx, role, user_id, profile).await?;
        let manager_id = required_id(manager_id, role.table())?;

        tx.commit().await?;

        tracing::info!(manager_id, %role, login, "User created");
        Ok(manager_id)
    }

    pub async fn create_local_user(
        &self,
        login: &str,
        password: &str,
        profile: &NewManager,
    ) -> Result<ManagerId, DbError> {
        self.create_user(ManagerRole::Local, login, password, profile)
            .await
    }

    pub async fn create_remote_user(
        &self,
        login: &str,
        password: &str,
        profile: &NewManager,
    ) -> Result<ManagerId, DbError> {
        self.create_user(ManagerRole::Remote, login, password, profile)
            .await
    }

    pub async fn add_category(&self, input: &CreateCategory) -> Result<DbId, DbError> {
        let id = CategoryRepo::create(self.store.pool(), input).await?;
        required_id(id, "categories")
    }

    /// Store a new category tree snapshot.
    pub async fn add_tree(&self, input: &CreateTree) -> Result<DbId, DbError> {
        let id = TreeRepo::create(self.store.pool(), input).await?;
        required_id(id, "trees")
    }

    pub async fn add_dish(&self, input: &CreateDish) -> Result<DbId, DbError> {
        let id = DishRepo::create(self.store.pool(), input).await?;
        required_id(id, "dishes")
    }

    /// Put an existing dish on the menu, returning the menu entry id.
    pub async fn add_dish_to_menu(&self, dish_id: DbId) -> Result<DbId, DbError> {
        let id = MenuRepo::add(self.store.pool(), dish_id).await?;
        required_id(id, "menu")
    }

    /// At most `n` orders, earliest first.
    pub async fn get_last_orders(&self, n: u32) -> Result<Vec<Order>, DbError> {
        let orders = OrderRepo::list_by_ordered_at(self.store.pool(), i64::from(n)).await?;
        Ok(orders)
    }
}

impl AccountManager for LocalManager {
    fn store(&self) -> &Store {
        &self.store
    }

    fn role(&self) -> ManagerRole {
        ManagerRole::Local
    }
}
