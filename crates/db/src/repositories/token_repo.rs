//! Repository for the `tokens` table.

use aio_core::types::{DbId, ManagerId};
use sqlx::PgPool;

use crate::models::token::TokenMatch;
use crate::models::user::ManagerRole;

/// Largest whole-second interval PostgreSQL stores (microseconds in an i64).
const MAX_INTERVAL_SECS: i64 = i64::MAX / 1_000_000;

/// Provides insert, lookup and cleanup for session tokens.
pub struct TokenRepo;

impl TokenRepo {
    /// Store `token` for the user behind manager `manager_id` of `role`.
    ///
    /// Returns `None` when no such manager exists, since the insert then
    /// selects no row.
    pub async fn create_for_manager(
        pool: &PgPool,
        role: ManagerRole,
        token: &str,
        manager_id: ManagerId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tokens (token, user_id)
             SELECT $1, m.user_id FROM {table} m WHERE m.id = $2
             RETURNING id",
            table = role.table()
        );
        sqlx::query_scalar(&query)
            .bind(token)
            .bind(manager_id)
            .fetch_optional(pool)
            .await
    }

    /// All rows carrying `token` whose user holds a profile of `role`,
    /// together with the store's current time.
    pub async fn find_for_role(
        pool: &PgPool,
        role: ManagerRole,
        token: &str,
    ) -> Result<Vec<TokenMatch>, sqlx::Error> {
        let query = format!(
            "SELECT m.id AS manager_id, t.inserted_at, NOW() AS checked_at
             FROM {table} m
             JOIN tokens t ON t.user_id = m.user_id
             WHERE t.token = $1",
            table = role.table()
        );
        sqlx::query_as::<_, TokenMatch>(&query)
            .bind(token)
            .fetch_all(pool)
            .await
    }

    /// Delete tokens at least `lifetime_secs` old. Returns the count of deleted rows.
    ///
    /// Lifetimes beyond what a PostgreSQL interval can hold are clamped;
    /// no stored token can be that old anyway.
    pub async fn delete_expired(pool: &PgPool, lifetime_secs: i64) -> Result<u64, sqlx::Error> {
        let lifetime_secs = lifetime_secs.clamp(0, MAX_INTERVAL_SECS);
        let result = sqlx::query(
            "DELETE FROM tokens WHERE NOW() - inserted_at >= make_interval(secs => $1)",
        )
        .bind(lifetime_secs as f64)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
