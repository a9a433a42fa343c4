//! Menu Item Model

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Ingredient;

/// A sellable menu item and its recipe
///
/// `ingredients` maps ingredient name to the quantity consumed per unit sold.
/// Referenced names are expected to exist in the inventory but this is not
/// enforced at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub ingredients: BTreeMap<String, i64>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        ingredients: BTreeMap<String, i64>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            description: description.into(),
            ingredients,
        }
    }

    /// One unit can be made from the given stock: every consumed ingredient
    /// exists and has at least the per-unit quantity on hand.
    pub fn is_available(&self, stock: &BTreeMap<String, Ingredient>) -> bool {
        self.ingredients.iter().all(|(name, qty)| {
            stock
                .get(name)
                .is_some_and(|ingredient| ingredient.stock_level >= *qty)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_of(entries: &[(&str, i64)]) -> BTreeMap<String, Ingredient> {
        entries
            .iter()
            .map(|(name, level)| {
                (
                    name.to_string(),
                    Ingredient::new(*name, *level, "grams", 0),
                )
            })
            .collect()
    }

    fn muffin() -> MenuItem {
        MenuItem::new(
            "Zest Muffin",
            Decimal::new(15000, 2),
            "Elevated Bites",
            "Lemon-poppy seed muffin.",
            BTreeMap::from([
                ("Flour".to_string(), 100),
                ("Lemon".to_string(), 1),
                ("Poppy Seeds".to_string(), 5),
            ]),
        )
    }

    #[test]
    fn available_when_all_ingredients_cover_one_unit() {
        let stock = stock_of(&[("Flour", 100), ("Lemon", 1), ("Poppy Seeds", 5)]);
        assert!(muffin().is_available(&stock));
    }

    #[test]
    fn unavailable_when_one_ingredient_short() {
        let stock = stock_of(&[("Flour", 99), ("Lemon", 1), ("Poppy Seeds", 5)]);
        assert!(!muffin().is_available(&stock));
    }

    #[test]
    fn unavailable_when_ingredient_missing_entirely() {
        let stock = stock_of(&[("Flour", 100), ("Lemon", 1)]);
        assert!(!muffin().is_available(&stock));
    }
}
