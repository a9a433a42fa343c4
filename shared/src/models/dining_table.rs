//! Dining Table Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder customer name for a free table
pub const NO_CUSTOMER: &str = "None";

/// Table state machine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table {id} is currently {status}, only available tables may be taken")]
    NotAvailable { id: String, status: TableStatus },
}

/// Occupancy state of a dining table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableStatus::Available => "AVAILABLE",
            TableStatus::Occupied => "OCCUPIED",
            TableStatus::Reserved => "RESERVED",
        };
        f.write_str(s)
    }
}

impl FromStr for TableStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(TableStatus::Available),
            "OCCUPIED" => Ok(TableStatus::Occupied),
            "RESERVED" => Ok(TableStatus::Reserved),
            other => Err(format!("unknown table status: {other}")),
        }
    }
}

/// Dining table entity
///
/// `status` and `customer` always change together: a free table carries the
/// [`NO_CUSTOMER`] placeholder, an occupied or reserved one the guest's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub capacity: i64,
    pub is_vip: bool,
    pub status: TableStatus,
    pub customer: String,
}

impl DiningTable {
    pub fn new(id: impl Into<String>, capacity: i64, is_vip: bool) -> Self {
        Self {
            id: id.into(),
            capacity,
            is_vip,
            status: TableStatus::Available,
            customer: NO_CUSTOMER.to_string(),
        }
    }

    pub fn occupy(&mut self, customer: impl Into<String>) {
        self.status = TableStatus::Occupied;
        self.customer = customer.into();
    }

    pub fn reserve(&mut self, customer: impl Into<String>) {
        self.status = TableStatus::Reserved;
        self.customer = customer.into();
    }

    pub fn free(&mut self) {
        self.status = TableStatus::Available;
        self.customer = NO_CUSTOMER.to_string();
    }

    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}
