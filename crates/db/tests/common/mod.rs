//! Shared setup for store integration tests.

#![allow(dead_code)]

use aio_core::settings::Settings;
use aio_core::types::{DbId, ManagerId};
use aio_db::accounts::{LocalManager, RemoteManager};
use aio_db::models::category::CreateCategory;
use aio_db::models::dish::CreateDish;
use aio_db::models::tree::{self, CreateTree};
use aio_db::models::user::NewManager;
use aio_db::Store;
use rust_decimal::Decimal;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

/// Default settings with a cheap hash so tests stay fast.
pub fn test_settings() -> Settings {
    Settings {
        hash_iterations: 1_000,
        ..Settings::default()
    }
}

/// Open a store on the per-test database and create the schema.
pub async fn store(pool_opts: PgPoolOptions, connect_opts: PgConnectOptions) -> Store {
    store_with(pool_opts, connect_opts, test_settings()).await
}

pub async fn store_with(
    pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
    settings: Settings,
) -> Store {
    let store = Store::connect_with(pool_opts, connect_opts, settings)
        .await
        .unwrap();
    store.create_all().await.unwrap();
    store
}

pub async fn managers(
    pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
) -> (LocalManager, RemoteManager) {
    let store = store(pool_opts, connect_opts).await;
    (LocalManager::new(store.clone()), RemoteManager::new(store))
}

pub fn profile(name: &str) -> NewManager {
    NewManager {
        name: name.to_string(),
    }
}

pub async fn local_user(local: &LocalManager, login: &str) -> ManagerId {
    local
        .create_local_user(login, "secret", &profile(login))
        .await
        .unwrap()
}

pub async fn remote_user(local: &LocalManager, login: &str) -> ManagerId {
    local
        .create_remote_user(login, "secret", &profile(login))
        .await
        .unwrap()
}

/// A category plus a tree containing it, both attributed to `admin`.
pub async fn catalog(local: &LocalManager, admin: ManagerId) -> (DbId, DbId) {
    let category = local
        .add_category(&CreateCategory {
            name: "Tea".to_string(),
            changed_by: admin,
        })
        .await
        .unwrap();
    let tree = local
        .add_tree(&CreateTree {
            tree: tree::single_level(category, &[]),
            changed_by: admin,
        })
        .await
        .unwrap();
    (category, tree)
}

pub fn dish(name: &str, category_id: DbId, changed_by: ManagerId) -> CreateDish {
    CreateDish {
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::new(450, 2),
        category_id,
        changed_by,
    }
}
