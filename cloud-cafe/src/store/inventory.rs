//! Inventory Manager

use std::collections::BTreeMap;
use std::path::Path;

use shared::models::{Ingredient, MenuItem, StockError};
use tracing::info;

use super::{CsvRecord, CsvStore, StoreError, StoreResult};

impl CsvRecord for Ingredient {
    const HEADER: &'static str = "Name,StockLevel,Unit,ReorderPoint";

    fn key(&self) -> &str {
        &self.name
    }

    fn to_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.name, self.stock_level, self.unit, self.reorder_point
        )
    }

    fn parse_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 4 {
            return None;
        }
        Some(Ingredient {
            name: parts[0].trim().to_string(),
            stock_level: parts[1].trim().parse().ok()?,
            unit: parts[2].trim().to_string(),
            reorder_point: parts[3].trim().parse().ok()?,
        })
    }
}

/// Keyed collection of ingredients backed by `inventory_data.csv`
#[derive(Debug)]
pub struct Inventory {
    store: CsvStore<Ingredient>,
    stock: BTreeMap<String, Ingredient>,
}

impl Inventory {
    pub const FILE_NAME: &'static str = "inventory_data.csv";

    /// Load the inventory, seeding the default ingredient set when the file
    /// is missing or yields nothing.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let store = CsvStore::new(data_dir.join(Self::FILE_NAME));
        let stock = store.load()?;
        let mut inventory = Self { store, stock };
        if inventory.stock.is_empty() {
            info!("inventory file empty or missing, seeding defaults");
            inventory.seed_defaults();
            inventory.save()?;
        }
        Ok(inventory)
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.stock)
    }

    pub fn stock(&self) -> &BTreeMap<String, Ingredient> {
        &self.stock
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.stock.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Ingredient> {
        self.stock.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stock.contains_key(name)
    }

    /// One unit of `item` can be made from current stock.
    pub fn is_available(&self, item: &MenuItem) -> bool {
        item.is_available(&self.stock)
    }

    /// Add a brand-new ingredient and persist. Duplicate names are rejected.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> StoreResult<()> {
        if self.contains(&ingredient.name) {
            return Err(StoreError::Duplicate(ingredient.name));
        }
        self.stock.insert(ingredient.name.clone(), ingredient);
        self.save()
    }

    /// Stock-in: increase an ingredient's level and persist.
    pub fn restock(&mut self, name: &str, amount: i64) -> StoreResult<()> {
        if amount <= 0 {
            return Err(StoreError::Validation(format!(
                "restock amount must be positive, got {amount}"
            )));
        }
        let Some(ingredient) = self.stock.get_mut(name) else {
            return Err(StoreError::NotFound(name.to_string()));
        };
        ingredient.add_stock(amount);
        self.save()
    }

    /// Stock-out: manual deduction from the inventory screen, persisted on
    /// success. The underlying deduction fails without mutation when the
    /// amount exceeds what is on hand.
    pub fn stock_out(&mut self, name: &str, amount: i64) -> StoreResult<Result<(), StockError>> {
        let Some(ingredient) = self.stock.get_mut(name) else {
            return Err(StoreError::NotFound(name.to_string()));
        };
        match ingredient.deduct_stock(amount) {
            Ok(()) => {
                self.save()?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    /// Ingredients at or below their reorder point.
    pub fn low_stock_alerts(&self) -> Vec<&Ingredient> {
        self.stock
            .values()
            .filter(|ingredient| ingredient.needs_reorder())
            .collect()
    }

    fn seed_defaults(&mut self) {
        let defaults = [
            // Base coffee & dairy
            Ingredient::new("Espresso Beans", 5000, "grams", 1000),
            Ingredient::new("Milk", 8000, "mL", 2000),
            Ingredient::new("Vanilla Syrup", 1500, "mL", 300),
            Ingredient::new("Dark Chocolate", 2000, "grams", 500),
            Ingredient::new("White Chocolate", 1000, "grams", 200),
            // Specialty add-ins
            Ingredient::new("Nitrogen", 50, "canisters", 5),
            Ingredient::new("Cardamom", 200, "grams", 50),
            Ingredient::new("Matcha Powder", 2000, "grams", 500),
            Ingredient::new("Honey", 1000, "mL", 200),
            Ingredient::new("Butterfly Pea", 500, "grams", 100),
            // Fruits & tea
            Ingredient::new("Lemon", 100, "pieces", 20),
            Ingredient::new("Mango", 50, "pieces", 10),
            Ingredient::new("Passion Fruit", 50, "pieces", 10),
            Ingredient::new("Tea Leaves", 2000, "grams", 500),
            Ingredient::new("Mint", 200, "grams", 50),
            // Food ingredients
            Ingredient::new("Sourdough Bread", 20, "loaves", 5),
            Ingredient::new("Avocado", 50, "pieces", 10),
            Ingredient::new("Cherry Tomatoes", 500, "grams", 100),
            Ingredient::new("Feta Cheese", 1000, "grams", 200),
            Ingredient::new("Flour", 5000, "grams", 1000),
            Ingredient::new("Poppy Seeds", 500, "grams", 100),
            Ingredient::new("Butterscotch", 1000, "mL", 200),
        ];
        for ingredient in defaults {
            self.stock.insert(ingredient.name.clone(), ingredient);
        }
    }
}
