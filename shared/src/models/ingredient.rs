//! Ingredient Model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stock mutation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("invalid stock amount: {0}")]
    InvalidAmount(i64),

    #[error("insufficient stock of {name}: requested {requested} {unit}, available {available}")]
    Insufficient {
        name: String,
        requested: i64,
        available: i64,
        unit: String,
    },
}

/// A single stocked ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub stock_level: i64,
    pub unit: String,
    pub reorder_point: i64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        stock_level: i64,
        unit: impl Into<String>,
        reorder_point: i64,
    ) -> Self {
        Self {
            name: name.into(),
            stock_level,
            unit: unit.into(),
            reorder_point,
        }
    }

    /// Stock is at or below the reorder point
    pub fn needs_reorder(&self) -> bool {
        self.stock_level <= self.reorder_point
    }

    /// Reduce stock by `amount` (used during checkout).
    ///
    /// Fails without touching the stock level when `amount` is not positive
    /// or exceeds what is on hand, so stock can never go negative.
    pub fn deduct_stock(&mut self, amount: i64) -> Result<(), StockError> {
        if amount <= 0 {
            return Err(StockError::InvalidAmount(amount));
        }
        if amount > self.stock_level {
            return Err(StockError::Insufficient {
                name: self.name.clone(),
                requested: amount,
                available: self.stock_level,
                unit: self.unit.clone(),
            });
        }
        self.stock_level -= amount;
        Ok(())
    }

    /// Increase stock by `amount` (replenishment). Non-positive amounts are ignored.
    pub fn add_stock(&mut self, amount: i64) {
        if amount > 0 {
            self.stock_level += amount;
        }
    }
}
