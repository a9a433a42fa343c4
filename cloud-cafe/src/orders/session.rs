//! Checkout session
//!
//! Transient state behind the transaction screen: the cart, the entered
//! customer id and the selected table. `checkout` runs the finalize-and-pay
//! sequence; once validation passes the sequence never aborts, matching the
//! single-user flow this models.

use chrono::Local;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::Cafe;
use crate::orders::cart::{Cart, CartError};
use crate::orders::receipt::{Receipt, ReceiptLine};
use crate::pricing::{self, CustomerStatus};
use shared::models::MenuItem;

/// Checkout validation errors; nothing is mutated when these fire
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Please select a table")]
    NoTableSelected,
}

/// Totals shown before confirming payment
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub customer: CustomerStatus,
}

/// One in-progress order at the till
#[derive(Debug, Default)]
pub struct OrderSession {
    cart: Cart,
    customer_id: String,
    table_id: Option<String>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    /// Add one unit of `item` to the cart, subject to availability.
    pub fn add_item(&mut self, item: &MenuItem, cafe: &Cafe) -> Result<(), CartError> {
        self.cart.add_item(item, &cafe.inventory)
    }

    /// Remove one unit of the named item.
    pub fn remove_item(&mut self, name: &str) {
        self.cart.remove_selected(name);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Store the customer-id input and resolve it. A staff id (M/C prefix)
    /// is rejected and the stored id cleared, as the original screen does.
    pub fn enter_customer_id(&mut self, raw_id: &str, cafe: &Cafe) -> CustomerStatus {
        self.customer_id = raw_id.trim().to_string();
        let status = pricing::resolve_customer(&cafe.users, &self.customer_id);
        if status == CustomerStatus::Invalid {
            self.customer_id.clear();
        }
        status
    }

    pub fn select_table(&mut self, table_id: impl Into<String>) {
        self.table_id = Some(table_id.into());
    }

    pub fn clear_table(&mut self) {
        self.table_id = None;
    }

    /// Current subtotal/discount/total for the entered customer id.
    pub fn totals(&self, cafe: &Cafe) -> Totals {
        let customer = pricing::resolve_customer(&cafe.users, &self.customer_id);
        let subtotal = self.cart.subtotal();
        let discount = pricing::discount_for(&customer, subtotal);
        Totals {
            subtotal,
            discount,
            total: subtotal - discount,
            customer,
        }
    }

    /// Finalize and pay.
    ///
    /// Validations run first and abort without touching any state. After
    /// that the sequence runs straight through: deduct ingredient stock per
    /// unit sold, credit loyalty points, occupy the table, persist all
    /// managers, emit the receipt and reset the session. Deduction and save
    /// failures are logged, never surfaced, and never rolled back.
    pub fn checkout(&mut self, cafe: &mut Cafe) -> Result<Receipt, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let Some(table_id) = self.table_id.clone() else {
            return Err(CheckoutError::NoTableSelected);
        };

        let Totals {
            subtotal,
            discount,
            total,
            customer,
        } = self.totals(cafe);

        info!(
            table = %table_id,
            customer = %customer.receipt_name(),
            %subtotal,
            %total,
            "checkout starting"
        );

        // 1. Deduct ingredient stock, one unit at a time. No availability
        //    re-validation here; an individual failure leaves that
        //    ingredient's level as-is.
        for line in self.cart.lines() {
            for _ in 0..line.quantity {
                for (name, qty) in &line.item.ingredients {
                    match cafe.inventory.get_mut(name) {
                        Some(ingredient) => {
                            if let Err(err) = ingredient.deduct_stock(*qty) {
                                warn!(item = %line.item.name, error = %err, "stock deduction failed");
                            }
                        }
                        None => {
                            warn!(item = %line.item.name, ingredient = %name, "recipe references unknown ingredient");
                        }
                    }
                }
            }
        }

        // 2. Credit loyalty points to a resolved member
        if let Some(id) = customer.member_id() {
            let earned = pricing::points_for(total);
            if let Some(user) = cafe.users.get_mut(id) {
                user.add_points(earned);
                info!(user = %id, points = earned, "loyalty points credited");
            }
        }

        // 3. Seat the customer. Unknown table ids are a no-op lookup miss.
        match cafe.tables.get_mut(&table_id) {
            Some(table) => table.occupy(customer.receipt_name()),
            None => warn!(table = %table_id, "selected table does not exist"),
        }

        // 4. Persist everything; in-memory state stands even if this fails
        if let Err(err) = cafe.save_all() {
            error!(error = %err, "post-checkout save failed, continuing with in-memory state");
        }

        let receipt = Receipt {
            timestamp: Local::now(),
            customer: customer.receipt_name().to_string(),
            table_id: table_id.clone(),
            lines: self
                .cart
                .lines()
                .iter()
                .map(|l| ReceiptLine::new(l.quantity, &l.item.name, l.line_total))
                .collect(),
            subtotal,
            discount,
            total,
        };

        // 5. Reset transient state for the next order
        self.cart.clear();
        self.customer_id.clear();
        self.table_id = None;

        info!(table = %table_id, %total, "checkout complete");
        Ok(receipt)
    }
}
