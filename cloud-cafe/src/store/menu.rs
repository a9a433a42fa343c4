//! Menu Manager

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use shared::models::MenuItem;
use tracing::info;

use super::{CsvRecord, CsvStore, StoreError, StoreResult};

impl CsvRecord for MenuItem {
    const HEADER: &'static str = "Name,Price,Category,Description,Ingredients";

    fn key(&self) -> &str {
        &self.name
    }

    fn to_row(&self) -> String {
        let ingredients = self
            .ingredients
            .iter()
            .map(|(name, qty)| format!("{name}:{qty}"))
            .collect::<Vec<_>>()
            .join("|");
        // Embedded commas in the description are stored as ';'
        format!(
            "{},{},{},{},{}",
            self.name,
            self.price,
            self.category,
            self.description.replace(',', ";"),
            ingredients
        )
    }

    fn parse_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.splitn(5, ',').collect();
        if parts.len() != 5 {
            return None;
        }

        let mut ingredients = BTreeMap::new();
        let ingredients_text = parts[4].trim();
        if !ingredients_text.is_empty() {
            for entry in ingredients_text.split('|') {
                let kv: Vec<&str> = entry.split(':').collect();
                if kv.len() == 2 {
                    ingredients.insert(kv[0].trim().to_string(), kv[1].trim().parse().ok()?);
                }
            }
        }

        Some(MenuItem {
            name: parts[0].trim().to_string(),
            price: parts[1].trim().parse::<Decimal>().ok()?,
            category: parts[2].trim().to_string(),
            description: parts[3].trim().replace(';', ","),
            ingredients,
        })
    }
}

/// Keyed collection of menu items backed by `menu_data.csv`
#[derive(Debug)]
pub struct Menu {
    store: CsvStore<MenuItem>,
    items: BTreeMap<String, MenuItem>,
}

impl Menu {
    pub const FILE_NAME: &'static str = "menu_data.csv";

    /// Load the menu, seeding the default card when the file is missing or
    /// yields nothing.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let store = CsvStore::new(data_dir.join(Self::FILE_NAME));
        let items = store.load()?;
        let mut menu = Self { store, items };
        if menu.items.is_empty() {
            info!("menu file empty or missing, seeding defaults");
            menu.seed_defaults();
            menu.save()?;
        }
        Ok(menu)
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.items)
    }

    pub fn items(&self) -> &BTreeMap<String, MenuItem> {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.get(name)
    }

    /// Items of one category, matched case-insensitively.
    pub fn by_category(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .values()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct category names in display order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.items.values() {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories.sort();
        categories
    }

    /// Add a new item to the card and persist. Duplicate names are rejected.
    pub fn add_item(&mut self, item: MenuItem) -> StoreResult<()> {
        if self.items.contains_key(&item.name) {
            return Err(StoreError::Duplicate(item.name));
        }
        self.items.insert(item.name.clone(), item);
        self.save()
    }

    fn seed_defaults(&mut self) {
        let price = |units: i64| Decimal::new(units, 2);
        let recipe = |entries: &[(&str, i64)]| -> BTreeMap<String, i64> {
            entries
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect()
        };

        let cloudy = "Cloudy Brews";
        let refreshers = "Weather Refreshers";
        let bites = "Elevated Bites";

        let defaults = [
            MenuItem::new(
                "Creamy Cumulatte",
                price(16500),
                cloudy,
                "Velvety vanilla bean latte with cloud foam.",
                recipe(&[
                    ("Espresso Beans", 18),
                    ("Vanilla Syrup", 20),
                    ("Milk", 200),
                    ("White Chocolate", 5),
                ]),
            ),
            MenuItem::new(
                "Stratospresso",
                price(17000),
                cloudy,
                "Layered Macchiato with dark chocolate hint.",
                recipe(&[("Espresso Beans", 20), ("Dark Chocolate", 15), ("Milk", 150)]),
            ),
            MenuItem::new(
                "Nimbus Cold Brew",
                price(18500),
                cloudy,
                "Nitrogen-infused creamy cold brew.",
                recipe(&[("Espresso Beans", 25), ("Nitrogen", 1)]),
            ),
            MenuItem::new(
                "Cirrus Fog Americano",
                price(14500),
                cloudy,
                "Americano infused with cardamom mist.",
                recipe(&[("Espresso Beans", 18), ("Cardamom", 2)]),
            ),
            MenuItem::new(
                "Altostratus Mocha",
                price(17500),
                cloudy,
                "Dense espresso and chocolate blend.",
                recipe(&[("Espresso Beans", 18), ("Dark Chocolate", 25), ("Milk", 180)]),
            ),
            MenuItem::new(
                "Aurora Lemonada",
                price(15000),
                refreshers,
                "Color-changing sparkling lemonade.",
                recipe(&[("Lemon", 2), ("Butterfly Pea", 5)]),
            ),
            MenuItem::new(
                "Morning Matcha",
                price(16000),
                refreshers,
                "Premium matcha latte with honey drizzle.",
                recipe(&[("Matcha Powder", 15), ("Milk", 200), ("Honey", 10)]),
            ),
            MenuItem::new(
                "Sunshower Smoothie",
                price(19500),
                refreshers,
                "Mango and passion fruit smoothie.",
                recipe(&[("Mango", 1), ("Passion Fruit", 1)]),
            ),
            MenuItem::new(
                "Rainy Iced Tea",
                price(14000),
                refreshers,
                "Bold black tea with mint and citrus.",
                recipe(&[("Tea Leaves", 10), ("Mint", 5), ("Lemon", 1)]),
            ),
            MenuItem::new(
                "Horizon Toast",
                price(23000),
                bites,
                "Sourdough toast with avocado and feta.",
                recipe(&[
                    ("Sourdough Bread", 1),
                    ("Avocado", 1),
                    ("Feta Cheese", 30),
                    ("Cherry Tomatoes", 30),
                ]),
            ),
            MenuItem::new(
                "Zest Muffin",
                price(15000),
                bites,
                "Lemon-poppy seed muffin.",
                recipe(&[("Flour", 100), ("Lemon", 1), ("Poppy Seeds", 5)]),
            ),
            MenuItem::new(
                "Celestial Roll",
                price(13500),
                bites,
                "Giant butterscotch sticky roll.",
                recipe(&[("Flour", 120), ("Butterscotch", 30)]),
            ),
        ];

        for item in defaults {
            self.items.insert(item.name.clone(), item);
        }
    }
}
