//! Pricing rules
//!
//! Customer resolution, the VIP discount and loyalty point accrual. All money
//! runs through `Decimal`; display rounding is 2 decimal places, half-up.

use rust_decimal::prelude::*;

use shared::models::Role;

use crate::store::UserManager;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Flat VIP discount: 10% of the subtotal
pub const VIP_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Currency units per loyalty point
const POINT_UNIT: Decimal = Decimal::TEN;

/// Outcome of resolving the id typed into the customer field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerStatus {
    /// Empty id: anonymous walk-in
    Guest,
    /// Staff ids (M/C prefix) are not valid customers; the input is cleared
    Invalid,
    /// Non-empty id with no matching account
    NotFound { entered: String },
    /// A known account
    Member { id: String, name: String, role: Role },
}

impl CustomerStatus {
    /// Label shown next to the id field.
    pub fn display_name(&self) -> String {
        match self {
            CustomerStatus::Guest => "Guest".to_string(),
            CustomerStatus::Invalid => "Invalid Customer ID".to_string(),
            CustomerStatus::NotFound { .. } => "User not found".to_string(),
            CustomerStatus::Member { name, role, .. } => format!("{name} ({role})"),
        }
    }

    /// Name that goes on the receipt and the occupied table.
    pub fn receipt_name(&self) -> &str {
        match self {
            CustomerStatus::Member { name, .. } => name,
            _ => "Guest",
        }
    }

    /// Account id when the customer resolved to one.
    pub fn member_id(&self) -> Option<&str> {
        match self {
            CustomerStatus::Member { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_vip(&self) -> bool {
        matches!(
            self,
            CustomerStatus::Member {
                role: Role::Vip,
                ..
            }
        )
    }
}

/// Resolve the raw customer-id input (trimmed, uppercased) against the
/// account map. Manager/cashier ids are rejected outright before any lookup.
pub fn resolve_customer(users: &UserManager, raw_id: &str) -> CustomerStatus {
    let id = raw_id.trim().to_uppercase();
    if id.is_empty() {
        return CustomerStatus::Guest;
    }
    if id.starts_with('M') || id.starts_with('C') {
        return CustomerStatus::Invalid;
    }
    match users.get(&id) {
        Some(user) => CustomerStatus::Member {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
        },
        None => CustomerStatus::NotFound { entered: id },
    }
}

/// Round a monetary value for display and storage.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Discount for the resolved customer: 10% of the subtotal for VIP members,
/// zero for everyone else.
pub fn discount_for(status: &CustomerStatus, subtotal: Decimal) -> Decimal {
    if status.is_vip() {
        round_money(subtotal * VIP_DISCOUNT_RATE)
    } else {
        Decimal::ZERO
    }
}

/// Loyalty points earned on a paid total: one point per 10 currency units.
pub fn points_for(total: Decimal) -> i64 {
    (total / POINT_UNIT).floor().to_i64().unwrap_or(0)
}
