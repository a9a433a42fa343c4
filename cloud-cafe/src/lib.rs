//! Cloud Café - café operations core
//!
//! Single-user point-of-sale logic behind the Cloud Café desktop app:
//!
//! - **Store** (`store`): CSV-backed managers for inventory, menu, tables and users
//! - **Pricing** (`pricing`): customer resolution, VIP discount, loyalty points
//! - **Orders** (`orders`): cart building and the checkout sequence
//! - **Core** (`core`): configuration and the `Cafe` aggregate
//!
//! # Module structure
//!
//! ```text
//! cloud-cafe/src/
//! ├── core/          # Config, Cafe aggregate
//! ├── store/         # CsvStore + per-entity managers
//! ├── pricing/       # discount and point rules
//! ├── orders/        # cart, checkout session, receipt
//! └── utils/         # logger
//! ```

pub mod cli;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Cafe, Config};
pub use orders::{Cart, CheckoutError, OrderSession, Receipt};
pub use pricing::CustomerStatus;
pub use store::{Access, Inventory, Menu, StoreError, TableManager, UserManager};
