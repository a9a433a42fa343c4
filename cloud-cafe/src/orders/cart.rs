//! Order cart

use rust_decimal::Decimal;
use shared::models::MenuItem;
use thiserror::Error;

use crate::store::Inventory;

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("insufficient stock for {0}")]
    InsufficientStock(String),
}

/// One cart line: a menu item snapshot with quantity and running total
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: i64,
    pub line_total: Decimal,
}

impl CartLine {
    fn new(item: MenuItem) -> Self {
        let line_total = item.price;
        Self {
            item,
            quantity: 1,
            line_total,
        }
    }

    fn increment(&mut self) {
        self.quantity += 1;
        self.recompute();
    }

    fn decrement(&mut self) {
        self.quantity -= 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.line_total = self.item.price * Decimal::from(self.quantity);
    }
}

/// Selected menu items with quantities, prior to payment
///
/// Availability is checked once, when an item is added; there is no re-check
/// between add and checkout (single-user desktop flow).
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add one unit of `item`. An item already in the cart gets its quantity
    /// bumped instead of a duplicate line. Fails when current stock cannot
    /// cover a single unit.
    pub fn add_item(&mut self, item: &MenuItem, inventory: &Inventory) -> Result<(), CartError> {
        if !inventory.is_available(item) {
            return Err(CartError::InsufficientStock(item.name.clone()));
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == item.name) {
            line.increment();
        } else {
            self.lines.push(CartLine::new(item.clone()));
        }
        Ok(())
    }

    /// Remove one unit of the named item; the line disappears when its
    /// quantity reaches zero. Unknown names are a no-op.
    pub fn remove_selected(&mut self, name: &str) {
        if let Some(idx) = self.lines.iter().position(|l| l.item.name == name) {
            if self.lines[idx].quantity > 1 {
                self.lines[idx].decrement();
            } else {
                self.lines.remove(idx);
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(|l| l.line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::store::Menu;

    fn seeded() -> (TempDir, Inventory, Menu) {
        let dir = TempDir::new().unwrap();
        let inventory = Inventory::open(dir.path()).unwrap();
        let menu = Menu::open(dir.path()).unwrap();
        (dir, inventory, menu)
    }

    #[test]
    fn adding_same_item_twice_merges_lines() {
        let (_dir, inventory, menu) = seeded();
        let latte = menu.get("Creamy Cumulatte").unwrap();

        let mut cart = Cart::new();
        cart.add_item(latte, &inventory).unwrap();
        cart.add_item(latte, &inventory).unwrap();

        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total, Decimal::new(33000, 2));
    }

    #[test]
    fn subtotal_is_sum_of_line_totals() {
        let (_dir, inventory, menu) = seeded();
        let latte = menu.get("Creamy Cumulatte").unwrap();
        let muffin = menu.get("Zest Muffin").unwrap();

        let mut cart = Cart::new();
        cart.add_item(latte, &inventory).unwrap();
        cart.add_item(latte, &inventory).unwrap();
        cart.add_item(muffin, &inventory).unwrap();

        assert_eq!(cart.subtotal(), Decimal::new(48000, 2));
    }

    #[test]
    fn remove_decrements_then_drops_line() {
        let (_dir, inventory, menu) = seeded();
        let latte = menu.get("Creamy Cumulatte").unwrap();

        let mut cart = Cart::new();
        cart.add_item(latte, &inventory).unwrap();
        cart.add_item(latte, &inventory).unwrap();

        cart.remove_selected("Creamy Cumulatte");
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].line_total, Decimal::new(16500, 2));

        cart.remove_selected("Creamy Cumulatte");
        assert!(cart.is_empty());

        // Removing from an empty cart is a no-op
        cart.remove_selected("Creamy Cumulatte");
        assert!(cart.is_empty());
    }

    #[test]
    fn unavailable_item_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut inventory = Inventory::open(dir.path()).unwrap();
        let menu = Menu::open(dir.path()).unwrap();

        // Drain the nitrogen so the cold brew cannot be made
        inventory.get_mut("Nitrogen").unwrap().stock_level = 0;

        let cold_brew = menu.get("Nimbus Cold Brew").unwrap();
        let mut cart = Cart::new();
        let err = cart.add_item(cold_brew, &inventory).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock("Nimbus Cold Brew".to_string())
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let (_dir, inventory, menu) = seeded();
        let mut cart = Cart::new();
        cart.add_item(menu.get("Zest Muffin").unwrap(), &inventory)
            .unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }
}
