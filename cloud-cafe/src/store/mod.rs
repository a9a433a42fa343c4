//! Store Module
//!
//! Flat-file persistence for the café state. Each entity type has a manager
//! owning an in-memory map plus one CSV file; `CsvStore` does the whole-file
//! load/save mechanics so the row format can change without touching the
//! managers or the business logic above them.

pub mod inventory;
pub mod menu;
pub mod tables;
pub mod users;

// Re-exports
pub use inventory::Inventory;
pub use menu::Menu;
pub use tables::{Access, TableManager, TablesError};
pub use users::UserManager;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A record that can live in a CSV store
///
/// `parse_row` returns `None` for malformed rows; the store skips and logs
/// them rather than failing the whole load.
pub trait CsvRecord: Sized {
    /// Fixed header line written before the records
    const HEADER: &'static str;

    /// Unique map key for this record
    fn key(&self) -> &str;

    /// Render one CSV row, without trailing newline
    fn to_row(&self) -> String;

    /// Parse one CSV row
    fn parse_row(line: &str) -> Option<Self>;
}

/// Whole-file CSV persistence for one record type
///
/// Save always overwrites the complete file (header first, one row per
/// record); there is no append or upsert path.
#[derive(Debug, Clone)]
pub struct CsvStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: CsvRecord> CsvStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all records, keyed by [`CsvRecord::key`].
    ///
    /// Malformed rows are logged and excluded; a missing file is an empty map.
    pub fn load(&self) -> StoreResult<BTreeMap<String, T>> {
        let mut records = BTreeMap::new();
        if !self.path.exists() {
            return Ok(records);
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        // First line is the header
        for line in contents.lines().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match T::parse_row(line) {
                Some(record) => {
                    records.insert(record.key().to_string(), record);
                }
                None => {
                    warn!(file = %self.path.display(), row = line, "skipping malformed row");
                }
            }
        }
        Ok(records)
    }

    /// Overwrite the file with the full record map.
    pub fn save(&self, records: &BTreeMap<String, T>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        let mut out = String::with_capacity(64 * (records.len() + 1));
        out.push_str(T::HEADER);
        out.push('\n');
        for record in records.values() {
            out.push_str(&record.to_row());
            out.push('\n');
        }

        let mut file = fs::File::create(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(out.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq)]
    struct Pair {
        key: String,
        value: i64,
    }

    impl CsvRecord for Pair {
        const HEADER: &'static str = "Key,Value";

        fn key(&self) -> &str {
            &self.key
        }

        fn to_row(&self) -> String {
            format!("{},{}", self.key, self.value)
        }

        fn parse_row(line: &str) -> Option<Self> {
            let (key, value) = line.split_once(',')?;
            Some(Pair {
                key: key.trim().to_string(),
                value: value.trim().parse().ok()?,
            })
        }
    }

    #[test]
    fn load_of_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store: CsvStore<Pair> = CsvStore::new(dir.path().join("pairs.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store: CsvStore<Pair> = CsvStore::new(dir.path().join("pairs.csv"));

        let mut map = BTreeMap::new();
        map.insert(
            "a".to_string(),
            Pair {
                key: "a".to_string(),
                value: 1,
            },
        );
        map.insert(
            "b".to_string(),
            Pair {
                key: "b".to_string(),
                value: 2,
            },
        );
        store.save(&map).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, map);

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("Key,Value\n"));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "Key,Value\na,1\nnot-a-pair\nb,two\nc,3\n").unwrap();

        let store: CsvStore<Pair> = CsvStore::new(&path);
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["a"].value, 1);
        assert_eq!(loaded["c"].value, 3);
    }
}
