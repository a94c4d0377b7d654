//! Shared building blocks: ids and timestamps, settings, password hashing
//! and session tokens. No database access lives here.

pub mod error;
pub mod password;
pub mod settings;
pub mod token;
pub mod types;
