//! SQLite-backed key-value storage.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use super::{KvStore, StoreError};

const CREATE_RECORDS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS records (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

const SELECT_VALUE_SQL: &str = "SELECT value FROM records WHERE key = ?1";

const UPSERT_VALUE_SQL: &str = "INSERT INTO records (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at";

const DELETE_VALUE_SQL: &str = "DELETE FROM records WHERE key = ?1";

/// Durable store backed by a single-table SQLite database.
///
/// Each operation opens a fresh connection, which keeps the store `Sync`
/// and safe to share across tasks without pooling. The schema is created
/// once at open time.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens the store at `path`, creating the database file and schema
    /// when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        // proves the file is usable and the schema exists
        store.connect()?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path).map_err(|e| {
            StoreError::Backend(format!(
                "Failed to open store at {}: {e}",
                self.path.display()
            ))
        })?;
        conn.execute(CREATE_RECORDS_TABLE_SQL, [])
            .map_err(|e| StoreError::Backend(format!("Failed to initialize schema: {e}")))?;
        Ok(conn)
    }
}

fn map_sqlite_error(key: &str, err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == ErrorCode::DiskFull {
            return StoreError::CapacityExceeded {
                key: key.to_string(),
            };
        }
    }
    StoreError::Backend(format!("SQLite error on key '{key}': {err}"))
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.connect()?;
        conn.query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .map_err(|e| map_sqlite_error(key, e))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(
            UPSERT_VALUE_SQL,
            params![key, value, Timestamp::now().to_string()],
        )
        .map_err(|e| map_sqlite_error(key, e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(DELETE_VALUE_SQL, params![key])
            .map_err(|e| map_sqlite_error(key, e))?;
        Ok(())
    }
}
