//! Shared domain types for the Cloud Café POS
//!
//! Plain value records used by every front end: ingredients, menu items,
//! dining tables and users. All mutation goes through explicit methods;
//! persistence and presentation live in the application crate.

pub mod models;

// Re-exports
pub use models::{
    DiningTable, Ingredient, MenuItem, Role, StockError, TableError, TableStatus, User,
};
pub use serde::{Deserialize, Serialize};
