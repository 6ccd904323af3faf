//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections.
//! Pooling and lifecycle management belong to the caller.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite("db_open"))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite("db_open"))
}

/// Configure a connection with optimal settings
pub fn configure(conn: &Connection) -> Result<()> {
    // Enable foreign keys
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite("db_configure"))?;

    // Set WAL mode for better concurrency
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(from_rusqlite("db_configure"))?;

    Ok(())
}
