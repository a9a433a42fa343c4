//! Café aggregate state

use std::path::Path;

use tracing::{error, info};

use crate::core::Config;
use crate::store::{Inventory, Menu, StoreResult, TableManager, UserManager};

/// The whole café: one manager per entity family, loaded from one data
/// directory. Exactly one `Cafe` exists per process; everything mutates it
/// from the single interactive thread.
#[derive(Debug)]
pub struct Cafe {
    pub inventory: Inventory,
    pub menu: Menu,
    pub tables: TableManager,
    pub users: UserManager,
}

impl Cafe {
    /// Load (or seed) all four managers from the configured data directory.
    pub fn load(config: &Config) -> StoreResult<Self> {
        Self::open(Path::new(&config.data_dir))
    }

    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let cafe = Self {
            inventory: Inventory::open(data_dir)?,
            menu: Menu::open(data_dir)?,
            tables: TableManager::open(data_dir)?,
            users: UserManager::open(data_dir)?,
        };
        info!(
            data_dir = %data_dir.display(),
            ingredients = cafe.inventory.stock().len(),
            menu_items = cafe.menu.items().len(),
            tables = cafe.tables.tables().len(),
            users = cafe.users.users().len(),
            "cafe state loaded"
        );
        Ok(cafe)
    }

    /// Persist every manager. Individual failures are logged and the first
    /// one is returned; the in-memory state is never rolled back.
    pub fn save_all(&self) -> StoreResult<()> {
        let mut first_err = None;
        let results = [
            ("inventory", self.inventory.save()),
            ("menu", self.menu.save()),
            ("tables", self.tables.save()),
            ("users", self.users.save()),
        ];
        for (name, result) in results {
            if let Err(err) = result {
                error!(manager = name, error = %err, "save failed");
                if first_err.is_none() {
                    first_err = Some(err);
                }
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
