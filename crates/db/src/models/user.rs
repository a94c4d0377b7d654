//! User and role-profile models.

use std::fmt;

use aio_core::types::{DbId, ManagerId};
use sqlx::FromRow;

/// Full row from the `users` table.
///
/// Carries the password hash and salt; never hand this to a client.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub login: String,
    pub password: String,
    pub salt: String,
}

/// DTO for inserting a user. The password is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub login: String,
    pub password_hash: String,
    pub salt: String,
}

/// Profile fields shared by both manager tables.
#[derive(Debug, Clone)]
pub struct NewManager {
    pub name: String,
}

/// Row from `local_managers` or `remote_managers`.
#[derive(Debug, Clone, FromRow)]
pub struct Manager {
    pub id: ManagerId,
    pub user_id: DbId,
    pub name: String,
}

/// Stored credentials of a user that holds a profile of some role.
#[derive(Debug, Clone, FromRow)]
pub struct ManagerCredentials {
    pub manager_id: ManagerId,
    pub password: String,
    pub salt: String,
}

/// Which profile table a manager lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerRole {
    /// On-site manager: edits the catalog, reads orders.
    Local,
    /// Off-site manager: reads the menu, places orders.
    Remote,
}

impl ManagerRole {
    /// Name of the profile table for this role.
    pub fn table(self) -> &'static str {
        match self {
            Self::Local => "local_managers",
            Self::Remote => "remote_managers",
        }
    }
}

impl fmt::Display for ManagerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote => f.write_str("remote"),
        }
    }
}
