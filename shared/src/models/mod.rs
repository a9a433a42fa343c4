//! Domain models

pub mod dining_table;
pub mod ingredient;
pub mod menu_item;
pub mod user;

// Re-exports
pub use dining_table::{DiningTable, TableError, TableStatus};
pub use ingredient::{Ingredient, StockError};
pub use menu_item::MenuItem;
pub use user::{Role, User};
