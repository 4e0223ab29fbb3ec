//! SQLite persistence for the catalog collections.
//!
//! Each collection is a table; `Repository` gives the services a uniform way
//! to list, insert and delete documents. Connections are opened per unit of
//! work and used from the blocking thread pool.

mod hero_slides;
mod products;

use common::gateway::{Collection, ValidationError};
use rusqlite::types::Type;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ApiError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS products (
    id          TEXT PRIMARY KEY,
    category    TEXT NOT NULL,
    name        TEXT NOT NULL,
    description TEXT,
    weight      TEXT NOT NULL DEFAULT '',
    price       REAL,
    image       TEXT,
    is_new      INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS products_by_category ON products (category, created_at);

CREATE TABLE IF NOT EXISTS hero_slides (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,
    id         TEXT NOT NULL UNIQUE,
    url        TEXT NOT NULL,
    kind       TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn open(&self) -> Result<Connection, ApiError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Creates the tables if they do not exist yet.
    pub fn init(&self) -> Result<(), ApiError> {
        self.open()?.execute_batch(SCHEMA)?;
        Ok(())
    }
}

/// Storage operations of one collection.
pub trait Repository:
    Collection<
        Document: Serialize + Send + Sync + 'static,
        Draft: DeserializeOwned + Send + 'static,
    > + 'static
{
    /// All documents in snapshot order.
    fn list(conn: &Connection) -> Result<Vec<Self::Document>, ApiError>;

    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Stores a draft under a fresh id and returns that id.
    fn insert(conn: &Connection, draft: Self::Draft) -> Result<String, ApiError>;

    /// Returns `false` when no document had that id.
    fn delete(conn: &Connection, id: &str) -> Result<bool, ApiError>;
}

/// Wraps a column decoding failure the way rusqlite reports its own.
fn conversion_error<E>(column: usize, e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e))
}

fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Database;
    use tempfile::TempDir;

    /// A freshly initialized database in its own temporary directory.
    pub fn temp_database() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("catalog.sqlite"));
        db.init().unwrap();
        (dir, db)
    }
}
