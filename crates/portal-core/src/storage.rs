//! Client-local key/value storage using redb.
//!
//! Plays the part of browser local storage: a flat map of string keys to
//! string values, scoped to one data directory. The portal keeps two keys in
//! it, the theme preference and the JSON-encoded registration counters.

use crate::error::PortalError;
use parking_lot::RwLock;
use redb::backends::InMemoryBackend;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// Key holding `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";

/// Key holding the JSON object of registration counters
pub const REGISTRATION_COUNTS_KEY: &str = "registrationCounts";

/// File name of the store inside the data directory
pub const STORE_FILE_NAME: &str = "local-storage.redb";

/// Key/value store shared by the theme controller and registration store
#[derive(Clone)]
pub struct LocalStore {
    db: Arc<RwLock<Database>>,
}

impl LocalStore {
    /// Open (or create) a store at the given path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open a store inside a data directory, using [`STORE_FILE_NAME`]
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Result<Self, PortalError> {
        Self::new(data_dir.as_ref().join(STORE_FILE_NAME))
    }

    /// A store that lives only as long as this process
    pub fn in_memory() -> Result<Self, PortalError> {
        let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> Result<Self, PortalError> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Read a value. Returns `None` if the key was never set.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, PortalError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    /// Write a value, replacing any previous one
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), PortalError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
