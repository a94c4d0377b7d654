//! Integration tests for catalog edits, the menu and orders.

mod common;

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use aio_db::accounts::AccountManager;
use aio_db::models::category::CreateCategory;
use aio_db::models::order::CreateOrder;
use aio_db::models::tree::{self, CreateTree};
use aio_db::repositories::{CategoryRepo, DishRepo, TreeRepo};

use common::{catalog, dish, local_user, managers, remote_user};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_catalog_rows_are_attributed(
    pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
) {
    let (local, _) = managers(pool_opts, connect_opts).await;
    let pool = local.store().pool();
    let admin = local_user(&local, "admin").await;

    let (category_id, tree_id) = catalog(&local, admin).await;
    let dish_id = local.add_dish(&dish("Sencha", category_id, admin)).await.unwrap();

    let category = CategoryRepo::find_by_id(pool, category_id).await.unwrap().unwrap();
    assert_eq!(category.name, "Tea");
    assert_eq!(category.changed_by, admin);

    let stored_tree = TreeRepo::find_by_id(pool, tree_id).await.unwrap().unwrap();
    assert_eq!(stored_tree.tree, tree::single_level(category_id, &[]));
    assert_eq!(stored_tree.changed_by, admin);

    let stored_dish = DishRepo::find_by_id(pool, dish_id).await.unwrap().unwrap();
    assert_eq!(stored_dish.name, "Sencha");
    assert_eq!(stored_dish.price.to_string(), "4.50");
    assert_eq!(stored_dish.category_id, category_id);
    assert_eq!(stored_dish.changed_by, admin);
}

#[sqlx::test(migrations = false)]
async fn test_category_requires_local_manager(
    pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
) {
    let (local, _) = managers(pool_opts, connect_opts).await;

    let result = local
        .add_category(&CreateCategory {
            name: "Orphan".to_string(),
            changed_by: 999,
        })
        .await;
    assert!(result.is_err(), "changed_by must reference a local manager");
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_menu_round_trip(pool_opts: PgPoolOptions, connect_opts: PgConnectOptions) {
    let (local, remote) = managers(pool_opts, connect_opts).await;
    let admin = local_user(&local, "admin").await;
    let (category_id, tree_id) = catalog(&local, admin).await;

    let on_menu = local.add_dish(&dish("Sencha", category_id, admin)).await.unwrap();
    let off_menu = local.add_dish(&dish("Gyokuro", category_id, admin)).await.unwrap();
    local.add_dish_to_menu(on_menu).await.unwrap();

    let menu = remote.get_menu().await.unwrap();
    let ids: Vec<_> = menu.dishes.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![on_menu]);
    assert!(!ids.contains(&off_menu));
    assert_eq!(menu.tree_id, Some(tree_id));
}

#[sqlx::test(migrations = false)]
async fn test_empty_menu(pool_opts: PgPoolOptions, connect_opts: PgConnectOptions) {
    let (_, remote) = managers(pool_opts, connect_opts).await;

    let menu = remote.get_menu().await.unwrap();
    assert!(menu.dishes.is_empty());
    assert_eq!(menu.tree_id, None);
}

#[sqlx::test(migrations = false)]
async fn test_menu_uses_lowest_tree_id(pool_opts: PgPoolOptions, connect_opts: PgConnectOptions) {
    let (local, remote) = managers(pool_opts, connect_opts).await;
    let admin = local_user(&local, "admin").await;
    let (category_id, first_tree) = catalog(&local, admin).await;

    let later_tree = local
        .add_tree(&CreateTree {
            tree: tree::single_level(category_id, &[category_id]),
            changed_by: admin,
        })
        .await
        .unwrap();
    assert!(later_tree > first_tree);

    let menu = remote.get_menu().await.unwrap();
    assert_eq!(menu.tree_id, Some(first_tree));
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_last_orders_limit_and_order(
    pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
) {
    let (local, remote) = managers(pool_opts, connect_opts).await;
    let admin = local_user(&local, "admin").await;
    let guest = remote_user(&local, "guest").await;
    let (_, tree_id) = catalog(&local, admin).await;

    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    // Stored out of chronological order on purpose.
    for minutes in [40, 10, 30, 0, 20] {
        remote
            .store_order(&CreateOrder {
                manager_id: guest,
                tree_id,
                payload: json!({ "items": [{ "dish": 1, "qty": minutes }] }),
                ordered_at: base + Duration::minutes(minutes),
            })
            .await
            .unwrap();
    }

    let orders = local.get_last_orders(3).await.unwrap();
    assert_eq!(orders.len(), 3);
    let times: Vec<_> = orders.iter().map(|o| o.ordered_at).collect();
    assert_eq!(
        times,
        vec![base, base + Duration::minutes(10), base + Duration::minutes(20)]
    );
    assert!(orders.iter().all(|o| o.manager_id == guest && o.tree_id == tree_id));
    assert_eq!(orders[0].payload, json!({ "items": [{ "dish": 1, "qty": 0 }] }));

    assert_eq!(local.get_last_orders(10).await.unwrap().len(), 5);
    assert!(local.get_last_orders(0).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_order_requires_remote_manager(
    pool_opts: PgPoolOptions,
    connect_opts: PgConnectOptions,
) {
    let (local, remote) = managers(pool_opts, connect_opts).await;
    let admin = local_user(&local, "admin").await;
    let (_, tree_id) = catalog(&local, admin).await;

    let result = remote
        .store_order(&CreateOrder {
            manager_id: 777,
            tree_id,
            payload: json!({}),
            ordered_at: Utc::now(),
        })
        .await;
    assert!(result.is_err());
}
