//! Storage initialization
//!
//! Creates the SQLite schema on first run. Safe to call on every start.

use rusqlite::Connection;

use crate::config::paths::SpendbookPaths;
use crate::error::SpendbookError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        purchase_date TEXT NOT NULL,
        about TEXT,
        created_at TEXT NOT NULL,
        category_id INTEGER NOT NULL REFERENCES categories(id)
    );

    CREATE INDEX IF NOT EXISTS idx_items_category ON items(category_id);
";

/// Create tables and indexes if they don't exist yet
pub fn setup_database(conn: &Connection) -> Result<(), SpendbookError> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(SCHEMA)
        .map_err(|e| SpendbookError::Storage(format!("Failed to create schema: {}", e)))?;
    Ok(())
}

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &SpendbookPaths) -> Result<(), SpendbookError> {
    paths.ensure_directories()?;

    let conn = Connection::open(paths.database_file())?;
    setup_database(&conn)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &SpendbookPaths) -> bool {
    !paths.database_file().exists()
}
