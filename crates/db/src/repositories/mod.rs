//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` (or an open transaction) as the first argument.
//! Inserts return the generated id as `Option`; turning a missing id into an
//! error is up to the caller.

pub mod category_repo;
pub mod dish_repo;
pub mod manager_repo;
pub mod menu_repo;
pub mod order_repo;
pub mod token_repo;
pub mod tree_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use dish_repo::DishRepo;
pub use manager_repo::ManagerRepo;
pub use menu_repo::MenuRepo;
pub use order_repo::OrderRepo;
pub use token_repo::TokenRepo;
pub use tree_repo::TreeRepo;
pub use user_repo::UserRepo;
