//! User Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role, drives discount eligibility and dashboard routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Cashier,
    Common,
    Vip,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Manager => "Manager",
            Role::Cashier => "Cashier",
            Role::Common => "Common",
            Role::Vip => "VIP",
        };
        f.write_str(s)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "cashier" => Ok(Role::Cashier),
            "common" => Ok(Role::Common),
            "vip" => Ok(Role::Vip),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Registered account: staff or member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub points: i64,
    pub password: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        points: i64,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            points,
            password: password.into(),
        }
    }

    /// Credit loyalty points earned at checkout
    pub fn add_points(&mut self, amount: i64) {
        self.points += amount;
    }

    pub fn is_vip(&self) -> bool {
        self.role == Role::Vip
    }
}
