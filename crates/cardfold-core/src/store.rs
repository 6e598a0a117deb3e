//! Durable session state using redb
//!
//! Holds exactly two entries, the same shape a browser cookie pair would
//! take: the authenticated flag and the last active carousel index. Each
//! entry carries a one-year expiry; expired entries read as absent.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::error::CardResult;

const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

/// Key for the authenticated flag
pub const AUTH_KEY: &str = "cards_auth";

/// Key for the last active carousel index
pub const INDEX_KEY: &str = "cards_index";

/// Entry lifetime; stale sessions fall back to defaults after a year
const ENTRY_TTL_DAYS: i64 = 365;

/// A value with its expiry instant
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Session store backed by redb
#[derive(Clone)]
pub struct Store {
    db: Arc<RwLock<Database>>,
}

impl Store {
    /// Open (or create) the session database under `dir`
    pub fn open(dir: &Path) -> CardResult<Self> {
        std::fs::create_dir_all(dir)?;
        let db = Database::create(dir.join("session.redb"))?;

        // Ensure the table exists so later read transactions never fail
        let txn = db.begin_write()?;
        {
            let _ = txn.open_table(SESSION_TABLE)?;
        }
        txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    fn set(&self, key: &str, value: &str) -> CardResult<()> {
        let entry = StoredEntry {
            value: value.to_string(),
            expires_at: Utc::now() + Duration::days(ENTRY_TTL_DAYS),
        };
        let encoded = serde_json::to_vec(&entry)?;

        let db = self.db.write();
        let txn = db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            table.insert(key, encoded.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn get(&self, key: &str) -> CardResult<Option<String>> {
        let db = self.db.read();
        let txn = db.begin_read()?;
        let table = txn.open_table(SESSION_TABLE)?;

        let Some(guard) = table.get(key)? else {
            return Ok(None);
        };
        // A corrupt entry reads as absent rather than failing the caller
        let Ok(entry) = serde_json::from_slice::<StoredEntry>(guard.value()) else {
            return Ok(None);
        };
        if entry.expires_at < Utc::now() {
            return Ok(None);
        }
        Ok(Some(entry.value))
    }

    /// Persist the authenticated flag
    pub fn set_authenticated(&self) -> CardResult<()> {
        self.set(AUTH_KEY, "true")
    }

    /// Whether a live authenticated flag exists
    pub fn is_authenticated(&self) -> CardResult<bool> {
        Ok(self.get(AUTH_KEY)?.as_deref() == Some("true"))
    }

    /// Persist the active carousel index
    pub fn save_index(&self, index: usize) -> CardResult<()> {
        self.set(INDEX_KEY, &index.to_string())
    }

    /// Read the persisted index. A missing, expired or unparseable entry
    /// returns `None`; range validation is the carousel's job.
    pub fn load_index(&self) -> CardResult<Option<i64>> {
        Ok(self.get(INDEX_KEY)?.and_then(|v| v.parse().ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        assert!(!store.is_authenticated().unwrap());
        assert_eq!(store.load_index().unwrap(), None);

        store.set_authenticated().unwrap();
        store.save_index(4).unwrap();

        assert!(store.is_authenticated().unwrap());
        assert_eq!(store.load_index().unwrap(), Some(4));
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = Store::open(dir.path()).unwrap();
            store.save_index(2).unwrap();
        }
        let store = Store::open(dir.path()).unwrap();
        assert_eq!(store.load_index().unwrap(), Some(2));
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let entry = StoredEntry {
            value: "3".to_string(),
            expires_at: Utc::now() - Duration::days(1),
        };
        let encoded = serde_json::to_vec(&entry).unwrap();
        {
            let db = store.db.write();
            let txn = db.begin_write().unwrap();
            {
                let mut table = txn.open_table(SESSION_TABLE).unwrap();
                table.insert(INDEX_KEY, encoded.as_slice()).unwrap();
            }
            txn.commit().unwrap();
        }

        assert_eq!(store.load_index().unwrap(), None);
    }

    #[test]
    fn test_garbage_index_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let entry = StoredEntry {
            value: "not-a-number".to_string(),
            expires_at: Utc::now() + Duration::days(1),
        };
        let encoded = serde_json::to_vec(&entry).unwrap();
        {
            let db = store.db.write();
            let txn = db.begin_write().unwrap();
            {
                let mut table = txn.open_table(SESSION_TABLE).unwrap();
                table.insert(INDEX_KEY, encoded.as_slice()).unwrap();
            }
            txn.commit().unwrap();
        }

        assert_eq!(store.load_index().unwrap(), None);
    }
}
