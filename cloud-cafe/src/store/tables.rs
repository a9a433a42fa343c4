//! Table Manager
//!
//! One table state machine, two permission levels: the customer-facing
//! reservation flow may only take AVAILABLE tables, while staff monitoring
//! may force any transition (override for walk-outs, mistakes, cleanup).

use std::collections::BTreeMap;
use std::path::Path;

use shared::models::{DiningTable, TableError, TableStatus, User};
use thiserror::Error;
use tracing::info;

use super::{CsvRecord, CsvStore, StoreError, StoreResult};

/// Who is asking for a table transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Customer self-service: AVAILABLE tables only
    Customer,
    /// Staff override: any transition allowed
    Staff,
}

/// Table operation errors
#[derive(Debug, Error)]
pub enum TablesError {
    #[error("table not found: {0}")]
    NotFound(String),

    #[error("table reservation is for VIP members only")]
    VipOnly,

    #[error(transparent)]
    NotAvailable(#[from] TableError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CsvRecord for DiningTable {
    const HEADER: &'static str = "ID,Capacity,IsVIP,Status,Customer";

    fn key(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.capacity, self.is_vip, self.status, self.customer
        )
    }

    fn parse_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 5 {
            return None;
        }
        Some(DiningTable {
            id: parts[0].trim().to_string(),
            capacity: parts[1].trim().parse().ok()?,
            is_vip: parts[2].trim().parse().ok()?,
            status: parts[3].trim().parse().ok()?,
            customer: parts[4].trim().to_string(),
        })
    }
}

/// Keyed collection of dining tables backed by `tables.csv`
#[derive(Debug)]
pub struct TableManager {
    store: CsvStore<DiningTable>,
    tables: BTreeMap<String, DiningTable>,
}

impl TableManager {
    pub const FILE_NAME: &'static str = "tables.csv";

    /// Load the floor plan, seeding the fixed ten-table layout when the file
    /// is missing or yields nothing.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let store = CsvStore::new(data_dir.join(Self::FILE_NAME));
        let tables = store.load()?;
        let mut manager = Self { store, tables };
        if manager.tables.is_empty() {
            info!("tables file empty or missing, seeding default floor plan");
            manager.seed_defaults();
            manager.save()?;
        }
        Ok(manager)
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.tables)
    }

    pub fn tables(&self) -> &BTreeMap<String, DiningTable> {
        &self.tables
    }

    pub fn get(&self, id: &str) -> Option<&DiningTable> {
        self.tables.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut DiningTable> {
        self.tables.get_mut(id)
    }

    pub fn available(&self) -> Vec<&DiningTable> {
        self.tables.values().filter(|t| t.is_available()).collect()
    }

    /// Move a table to `target`, honoring the caller's permission level, and
    /// persist the change. Customers may only take AVAILABLE tables; staff
    /// may force any transition.
    pub fn transition(
        &mut self,
        id: &str,
        target: TableStatus,
        customer: &str,
        access: Access,
    ) -> Result<(), TablesError> {
        let table = self
            .tables
            .get_mut(id)
            .ok_or_else(|| TablesError::NotFound(id.to_string()))?;

        if access == Access::Customer && target != TableStatus::Available && !table.is_available()
        {
            return Err(TableError::NotAvailable {
                id: table.id.clone(),
                status: table.status,
            }
            .into());
        }

        match target {
            TableStatus::Available => table.free(),
            TableStatus::Occupied => table.occupy(customer),
            TableStatus::Reserved => table.reserve(customer),
        }
        self.save()?;
        Ok(())
    }

    /// Customer-facing reservation: VIP members only, AVAILABLE tables only.
    pub fn reserve_for(&mut self, id: &str, user: &User) -> Result<(), TablesError> {
        if !user.is_vip() {
            return Err(TablesError::VipOnly);
        }
        self.transition(id, TableStatus::Reserved, &user.name, Access::Customer)
    }

    fn seed_defaults(&mut self) {
        let defaults = [
            // 2 VIP tables (4 seater)
            DiningTable::new("VIP 1", 4, true),
            DiningTable::new("VIP 2", 4, true),
            // 3 regular tables (4 seater), center area
            DiningTable::new("Table 1", 4, false),
            DiningTable::new("Table 2", 4, false),
            DiningTable::new("Table 3", 4, false),
            // 5 regular tables (2 seater), side area
            DiningTable::new("T4", 2, false),
            DiningTable::new("T5", 2, false),
            DiningTable::new("T6", 2, false),
            DiningTable::new("T7", 2, false),
            DiningTable::new("T8", 2, false),
        ];
        for table in defaults {
            self.tables.insert(table.id.clone(), table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;
    use tempfile::TempDir;

    fn vip() -> User {
        User::new("V001", "Antoni VIP", Role::Vip, 120, "1234")
    }

    #[test]
    fn table_row_round_trips() {
        let mut table = DiningTable::new("VIP 1", 4, true);
        table.reserve("Antoni VIP");
        let row = table.to_row();
        assert_eq!(row, "VIP 1,4,true,RESERVED,Antoni VIP");
        assert_eq!(DiningTable::parse_row(&row), Some(table));
    }

    #[test]
    fn bad_status_rejects_row() {
        assert!(DiningTable::parse_row("T4,2,false,TAKEN,None").is_none());
    }

    #[test]
    fn open_seeds_ten_tables() {
        let dir = TempDir::new().unwrap();
        let manager = TableManager::open(dir.path()).unwrap();
        assert_eq!(manager.tables().len(), 10);
        assert_eq!(manager.get("VIP 1").unwrap().capacity, 4);
        assert!(manager.get("VIP 2").unwrap().is_vip);
        assert_eq!(manager.get("T8").unwrap().capacity, 2);
        assert_eq!(manager.available().len(), 10);
    }

    #[test]
    fn customer_cannot_take_non_available_table() {
        let dir = TempDir::new().unwrap();
        let mut manager = TableManager::open(dir.path()).unwrap();
        manager
            .transition("VIP 1", TableStatus::Occupied, "Walk-in", Access::Staff)
            .unwrap();

        let err = manager.reserve_for("VIP 1", &vip()).unwrap_err();
        assert!(matches!(err, TablesError::NotAvailable(_)));
        assert_eq!(manager.get("VIP 1").unwrap().customer, "Walk-in");
    }

    #[test]
    fn staff_can_force_any_transition() {
        let dir = TempDir::new().unwrap();
        let mut manager = TableManager::open(dir.path()).unwrap();
        manager
            .transition("Table 1", TableStatus::Reserved, "A", Access::Staff)
            .unwrap();
        // Reserved straight to Occupied, which a customer could never do
        manager
            .transition("Table 1", TableStatus::Occupied, "B", Access::Staff)
            .unwrap();
        assert_eq!(manager.get("Table 1").unwrap().status, TableStatus::Occupied);
        assert_eq!(manager.get("Table 1").unwrap().customer, "B");
    }

    #[test]
    fn non_vip_cannot_reserve() {
        let dir = TempDir::new().unwrap();
        let mut manager = TableManager::open(dir.path()).unwrap();
        let common = User::new("U001", "Sophia Common", Role::Common, 50, "1234");
        assert!(matches!(
            manager.reserve_for("Table 1", &common),
            Err(TablesError::VipOnly)
        ));
        assert!(manager.get("Table 1").unwrap().is_available());
    }

    #[test]
    fn transitions_persist_immediately() {
        let dir = TempDir::new().unwrap();
        let mut manager = TableManager::open(dir.path()).unwrap();
        manager.reserve_for("VIP 2", &vip()).unwrap();

        let reopened = TableManager::open(dir.path()).unwrap();
        let table = reopened.get("VIP 2").unwrap();
        assert_eq!(table.status, TableStatus::Reserved);
        assert_eq!(table.customer, "Antoni VIP");
    }

    #[test]
    fn unknown_table_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut manager = TableManager::open(dir.path()).unwrap();
        assert!(matches!(
            manager.transition("T99", TableStatus::Occupied, "X", Access::Staff),
            Err(TablesError::NotFound(_))
        ));
    }
}
