//! Repository for the `users` table.

use aio_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, login, password, salt";

/// Provides insert and lookup for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user inside `tx`, returning its id.
    ///
    /// A duplicate login fails with a unique violation on `uq_users_login`.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateUser,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO users (login, password, salt)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.login)
        .bind(&input.password_hash)
        .bind(&input.salt)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Find a user by login (case-sensitive).
    pub async fn find_by_login(pool: &PgPool, login: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE login = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }
}
