use aio_core::types::DbId;

/// Errors returned by store operations.
///
/// Authentication failures are not errors; they surface as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Connection or query failure, passed through unchanged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An insert that must produce an id produced none.
    #[error("Insert into {table} returned no id")]
    MissingId { table: &'static str },

    #[error("Login already taken: {0}")]
    LoginTaken(String),
}

/// Turn an optional generated id into a hard error when absent.
pub fn required_id(id: Option<DbId>, table: &'static str) -> Result<DbId, DbError> {
    id.ok_or(DbError::MissingId { table })
}

/// Whether `err` is a unique violation on the named constraint.
///
/// PostgreSQL reports unique violations with SQLSTATE 23505.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
