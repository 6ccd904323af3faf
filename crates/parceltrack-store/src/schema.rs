//! Parcel table schema
//!
//! The repository itself never creates tables; this module is the
//! schema-setup collaborator callers (and tests) run once per database.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Schema for the parcel table, applied idempotently
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS parcel (
    number     INTEGER PRIMARY KEY AUTOINCREMENT,
    client     INTEGER NOT NULL,
    status     TEXT NOT NULL,
    address    TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_parcel_client ON parcel (client);
";

/// Ensure the parcel table and its client index exist
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(from_rusqlite("ensure_schema"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        // Table is usable after repeated application
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM parcel", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
