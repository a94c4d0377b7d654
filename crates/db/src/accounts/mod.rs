//! Account managers: credential checks and session tokens shared by both
//! roles, plus the operations each role is allowed to perform.
//!
//! - [`local`] -- [`LocalManager`]: user creation, catalog edits, order listing.
//! - [`remote`] -- [`RemoteManager`]: menu reads, order placement.
//!
//! Ids handed in and out are manager (role-profile) ids, never raw user ids.

use aio_core::password::verify_password;
use aio_core::token::{new_token, session_alive};
use aio_core::types::ManagerId;
use async_trait::async_trait;

use crate::error::{required_id, DbError};
use crate::models::user::ManagerRole;
use crate::repositories::{ManagerRepo, TokenRepo};
use crate::Store;

pub mod local;
pub mod remote;

pub use local::LocalManager;
pub use remote::RemoteManager;

/// Shared session logic over one profile table.
///
/// Implementors only say which store they use and which role they act as;
/// everything else comes from the default methods.
#[async_trait]
pub trait AccountManager: Send + Sync {
    fn store(&self) -> &Store;

    /// Role whose profile table this manager authenticates against.
    fn role(&self) -> ManagerRole;

    /// Check `login`/`password` against users holding this role.
    ///
    /// Unknown logins, wrong passwords and logins without a profile of this
    /// role all yield `Ok(None)`.
    async fn verify_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<ManagerId>, DbError> {
        let store = self.store();
        let Some(credentials) =
            ManagerRepo::find_credentials(store.pool(), self.role(), login).await?
        else {
            return Ok(None);
        };

        let params = store.settings().hash_params();
        if verify_password(password, &credentials.salt, &credentials.password, &params) {
            Ok(Some(credentials.manager_id))
        } else {
            Ok(None)
        }
    }

    /// Issue a new session token for `manager_id`.
    ///
    /// Fails with [`DbError::MissingId`] if no manager of this role has that id.
    async fn create_token(&self, manager_id: ManagerId) -> Result<String, DbError> {
        let store = self.store();
        let token = new_token(store.settings().token_bytes());
        let id = TokenRepo::create_for_manager(store.pool(), self.role(), &token, manager_id)
            .await?;
        required_id(id, "tokens")?;

        tracing::info!(manager_id, role = %self.role(), "Session token issued");
        Ok(token)
    }

    /// Resolve `token` to a manager of this role if it is younger than the
    /// configured session lifetime. Expired tokens are left in place.
    async fn verify_token(&self, token: &str) -> Result<Option<ManagerId>, DbError> {
        let store = self.store();
        let lifetime = store.settings().session_lifetime();
        let matches = TokenRepo::find_for_role(store.pool(), self.role(), token).await?;

        Ok(matches
            .into_iter()
            .find(|m| session_alive(m.inserted_at, m.checked_at, lifetime))
            .map(|m| m.manager_id))
    }

    /// Delete every token past the session lifetime, whatever its role.
    async fn purge_expired_tokens(&self) -> Result<u64, DbError> {
        let store = self.store();
        let lifetime_secs = store.settings().session_lifetime().num_seconds();
        let deleted = TokenRepo::delete_expired(store.pool(), lifetime_secs).await?;
        tracing::info!(deleted, "Expired session tokens purged");
        Ok(deleted)
    }

    /// Ensure the schema exists.
    async fn create_all(&self) -> Result<(), DbError> {
        self.store().create_all().await?;
        Ok(())
    }
}
