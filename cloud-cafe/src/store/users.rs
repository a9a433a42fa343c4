//! User Manager

use std::collections::BTreeMap;
use std::path::Path;

use shared::models::{Role, User};
use tracing::info;

use super::{CsvRecord, CsvStore, StoreError, StoreResult};

impl CsvRecord for User {
    const HEADER: &'static str = "ID,Name,Role,Points,Password";

    fn key(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.role, self.points, self.password
        )
    }

    fn parse_row(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 5 {
            return None;
        }
        Some(User {
            id: parts[0].trim().to_string(),
            name: parts[1].trim().to_string(),
            role: parts[2].trim().parse().ok()?,
            points: parts[3].trim().parse().ok()?,
            password: parts[4].trim().to_string(),
        })
    }
}

/// Keyed collection of accounts backed by `users.csv`
#[derive(Debug)]
pub struct UserManager {
    store: CsvStore<User>,
    users: BTreeMap<String, User>,
}

impl UserManager {
    pub const FILE_NAME: &'static str = "users.csv";

    /// Load accounts, seeding the default staff/member set when the file is
    /// missing or yields nothing.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let store = CsvStore::new(data_dir.join(Self::FILE_NAME));
        let users = store.load()?;
        let mut manager = Self { store, users };
        if manager.users.is_empty() {
            info!("users file empty or missing, seeding defaults");
            manager.seed_defaults();
            manager.save()?;
        }
        Ok(manager)
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.users)
    }

    pub fn users(&self) -> &BTreeMap<String, User> {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    /// Plaintext credential check, as the original does it. Returns the
    /// account on a match.
    pub fn authenticate(&self, id: &str, password: &str) -> Option<&User> {
        self.users
            .get(id)
            .filter(|user| user.password == password)
    }

    /// Self-service sign-up: rejects taken ids and persists immediately.
    pub fn register(&mut self, user: User) -> StoreResult<()> {
        if self.users.contains_key(&user.id) {
            return Err(StoreError::Duplicate(user.id));
        }
        self.users.insert(user.id.clone(), user);
        self.save()
    }

    fn seed_defaults(&mut self) {
        let defaults = [
            User::new("M001", "KC Carr", Role::Manager, 0, "1234"),
            User::new("C001", "Nigel Cashier", Role::Cashier, 0, "1234"),
            User::new("U001", "Sophia Common", Role::Common, 50, "1234"),
            User::new("V001", "Antoni VIP", Role::Vip, 120, "1234"),
        ];
        for user in defaults {
            self.users.insert(user.id.clone(), user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn user_row_round_trips() {
        let user = User::new("V001", "Antoni VIP", Role::Vip, 120, "1234");
        let row = user.to_row();
        assert_eq!(row, "V001,Antoni VIP,VIP,120,1234");
        assert_eq!(User::parse_row(&row), Some(user));
    }

    #[test]
    fn bad_role_or_points_rejects_row() {
        assert!(User::parse_row("X001,Name,Janitor,0,pw").is_none());
        assert!(User::parse_row("X001,Name,VIP,many,pw").is_none());
    }

    #[test]
    fn open_seeds_default_accounts() {
        let dir = TempDir::new().unwrap();
        let manager = UserManager::open(dir.path()).unwrap();
        assert_eq!(manager.users().len(), 4);
        assert_eq!(manager.get("V001").unwrap().points, 120);
        assert_eq!(manager.get("M001").unwrap().role, Role::Manager);
    }

    #[test]
    fn authenticate_checks_password() {
        let dir = TempDir::new().unwrap();
        let manager = UserManager::open(dir.path()).unwrap();
        assert!(manager.authenticate("V001", "1234").is_some());
        assert!(manager.authenticate("V001", "wrong").is_none());
        assert!(manager.authenticate("Z999", "1234").is_none());
    }

    #[test]
    fn register_rejects_taken_id_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut manager = UserManager::open(dir.path()).unwrap();

        let dup = User::new("V001", "Impostor", Role::Common, 0, "pw");
        assert!(matches!(
            manager.register(dup),
            Err(StoreError::Duplicate(_))
        ));

        manager
            .register(User::new("U005", "New Member", Role::Common, 0, "pw"))
            .unwrap();
        let reopened = UserManager::open(dir.path()).unwrap();
        assert_eq!(reopened.get("U005").unwrap().name, "New Member");
    }
}
