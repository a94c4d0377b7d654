//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the table row and,
//! where the table is written to, a create DTO for inserts.

pub mod category;
pub mod dish;
pub mod menu;
pub mod order;
pub mod token;
pub mod tree;
pub mod user;
