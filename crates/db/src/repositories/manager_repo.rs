//! Repository for the `local_managers` and `remote_managers` tables.
//!
//! Both tables share one layout, so every method takes the [`ManagerRole`]
//! selecting which one to hit.

use aio_core::types::{DbId, ManagerId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::user::{Manager, ManagerCredentials, ManagerRole, NewManager};

/// Provides profile inserts and credential lookups.
pub struct ManagerRepo;

impl ManagerRepo {
    /// Insert the profile row for `user_id` inside `tx`, returning the manager id.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        role: ManagerRole,
        user_id: DbId,
        profile: &NewManager,
    ) -> Result<Option<ManagerId>, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (user_id, name) VALUES ($1, $2) RETURNING id",
            table = role.table()
        );
        sqlx::query_scalar(&query)
            .bind(user_id)
            .bind(&profile.name)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Find a manager profile by id.
    pub async fn find_by_id(
        pool: &PgPool,
        role: ManagerRole,
        id: ManagerId,
    ) -> Result<Option<Manager>, sqlx::Error> {
        let query = format!(
            "SELECT id, user_id, name FROM {table} WHERE id = $1",
            table = role.table()
        );
        sqlx::query_as::<_, Manager>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the stored hash and salt for `login`, provided the user holds a
    /// profile of `role`.
    pub async fn find_credentials(
        pool: &PgPool,
        role: ManagerRole,
        login: &str,
    ) -> Result<Option<ManagerCredentials>, sqlx::Error> {
        let query = format!(
            "SELECT m.id AS manager_id, u.password, u.salt
             FROM {table} m
             JOIN users u ON u.id = m.user_id
             WHERE u.login = $1",
            table = role.table()
        );
        sqlx::query_as::<_, ManagerCredentials>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }
}
