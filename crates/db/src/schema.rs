//! Table declarations.
//!
//! Column widths come from [`Settings`], so the DDL is generated at runtime
//! instead of living in static migration files. Every statement is
//! `IF NOT EXISTS`; running [`create_all`] on an up-to-date database is a
//! no-op.

use aio_core::settings::Settings;

use crate::DbPool;

/// Every table, in creation order (referenced tables first).
pub const TABLES: [&str; 10] = [
    "users",
    "tokens",
    "local_managers",
    "remote_managers",
    "restaurants",
    "categories",
    "trees",
    "dishes",
    "menu",
    "orders",
];

/// Build the DDL statements for the configured schema.
pub fn statements(settings: &Settings) -> Vec<String> {
    let s = &settings.schema;
    let n = settings.string_len;
    let hash_n = settings.hash_len;
    let salt_n = settings.salt_len;
    let token_n = settings.token_len;
    let acc = settings.currency_acc;

    vec![
        format!("CREATE SCHEMA IF NOT EXISTS {s}"),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.users (
                id BIGSERIAL PRIMARY KEY,
                login VARCHAR({n}) NOT NULL,
                password VARCHAR({hash_n}) NOT NULL,
                salt VARCHAR({salt_n}) NOT NULL,
                CONSTRAINT uq_users_login UNIQUE (login)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.tokens (
                id BIGSERIAL PRIMARY KEY,
                token VARCHAR({token_n}) NOT NULL,
                user_id BIGINT NOT NULL REFERENCES {s}.users (id),
                inserted_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT uq_tokens_token UNIQUE (token)
            )"
        ),
        format!("CREATE INDEX IF NOT EXISTS idx_tokens_inserted_at ON {s}.tokens (inserted_at)"),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.local_managers (
                id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL REFERENCES {s}.users (id),
                name VARCHAR({n}) NOT NULL,
                CONSTRAINT uq_local_managers_user_id UNIQUE (user_id)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.remote_managers (
                id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL REFERENCES {s}.users (id),
                name VARCHAR({n}) NOT NULL,
                CONSTRAINT uq_remote_managers_user_id UNIQUE (user_id)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.restaurants (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR({n}) NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.categories (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR({n}) NOT NULL,
                changed_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                changed_by BIGINT NOT NULL REFERENCES {s}.local_managers (id)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.trees (
                id BIGSERIAL PRIMARY KEY,
                tree JSONB NOT NULL,
                changed_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                changed_by BIGINT NOT NULL REFERENCES {s}.local_managers (id)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.dishes (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR({n}) NOT NULL,
                description TEXT NOT NULL,
                price NUMERIC({p}, {sc}) NOT NULL,
                category_id BIGINT NOT NULL REFERENCES {s}.categories (id),
                changed_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                changed_by BIGINT NOT NULL REFERENCES {s}.local_managers (id)
            )",
            p = acc.precision,
            sc = acc.scale,
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.menu (
                id BIGSERIAL PRIMARY KEY,
                dish_id BIGINT NOT NULL REFERENCES {s}.dishes (id)
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {s}.orders (
                id BIGSERIAL PRIMARY KEY,
                manager_id BIGINT NOT NULL REFERENCES {s}.remote_managers (id),
                tree_id BIGINT NOT NULL REFERENCES {s}.trees (id),
                payload JSONB NOT NULL,
                ordered_at TIMESTAMPTZ NOT NULL
            )"
        ),
        format!("CREATE INDEX IF NOT EXISTS idx_orders_ordered_at ON {s}.orders (ordered_at)"),
    ]
}

/// Create the schema and all tables in one transaction.
pub async fn create_all(pool: &DbPool, settings: &Settings) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in statements(settings) {
        sqlx::query(&statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(schema = %settings.schema, "Schema objects ensured");
    Ok(())
}
