//! SQLite repository for parcel records
//!
//! Each operation issues a single autocommitted statement (or one query
//! plus a full result drain) against the borrowed connection. The
//! `"registered"` gate on address changes and deletion is encoded in each
//! statement's filter clause, not as a database constraint.

use crate::errors::{from_rusqlite, parcel_not_found, Result};
use chrono::{DateTime, Utc};
use parceltrack_core::model::{Parcel, STATUS_REGISTERED};
use rusqlite::{Connection, OptionalExtension, Row};

/// SQLite repository for parcels
///
/// Borrows an externally supplied, already-open connection; owns no
/// connection lifecycle and keeps no state of its own.
pub struct ParcelRepo<'conn> {
    conn: &'conn Connection,
}

impl<'conn> ParcelRepo<'conn> {
    /// Create a repository over the given connection
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Insert a new parcel row and return the store-assigned number
    ///
    /// The record's `number` field is ignored on insert; SQLite assigns
    /// the identifier.
    pub fn add(&self, parcel: &Parcel) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO parcel (client, status, address, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    parcel.client,
                    parcel.status,
                    parcel.address,
                    parcel.created_at.to_rfc3339(),
                ],
            )
            .map_err(from_rusqlite("parcel_add"))?;

        let number = self.conn.last_insert_rowid();
        tracing::debug!(number, client = parcel.client, "inserted parcel");

        Ok(number)
    }

    /// Get the parcel with the given number
    ///
    /// Returns `TrackError::NotFound` when no row matches. The number is
    /// the primary key, so at most one row can match.
    pub fn get(&self, number: i64) -> Result<Parcel> {
        self.conn
            .query_row(
                "SELECT number, client, status, address, created_at
                 FROM parcel
                 WHERE number = ?1",
                [number],
                map_parcel_row,
            )
            .optional()
            .map_err(from_rusqlite("parcel_get"))?
            .ok_or_else(|| parcel_not_found(number))
    }

    /// List all parcels belonging to the given client, ordered by number
    ///
    /// Returns an empty vec, not an error, when no rows match. The row
    /// cursor is drained completely so a mid-iteration failure surfaces
    /// even after some rows were already read.
    pub fn get_by_client(&self, client: i64) -> Result<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT number, client, status, address, created_at
                 FROM parcel
                 WHERE client = ?1
                 ORDER BY number",
            )
            .map_err(from_rusqlite("parcel_get_by_client"))?;

        let parcels = stmt
            .query_map([client], map_parcel_row)
            .map_err(from_rusqlite("parcel_get_by_client"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite("parcel_get_by_client"))?;

        Ok(parcels)
    }

    /// Overwrite the status of the parcel with the given number
    ///
    /// Unconditional: any current status is replaced, and a number that
    /// matches no row is a silent no-op, not an error.
    pub fn set_status(&self, number: i64, status: &str) -> Result<()> {
        let affected = self
            .conn
            .execute(
                "UPDATE parcel SET status = ?1 WHERE number = ?2",
                rusqlite::params![status, number],
            )
            .map_err(from_rusqlite("parcel_set_status"))?;

        tracing::debug!(number, status, affected, "updated parcel status");

        Ok(())
    }

    /// Overwrite the address of the parcel with the given number, only
    /// while it is still in the registered status
    ///
    /// A parcel in any other status is silently left unchanged; callers
    /// cannot distinguish that from a successful update by the return
    /// value alone.
    pub fn set_address(&self, number: i64, address: &str) -> Result<()> {
        let affected = self
            .conn
            .execute(
                "UPDATE parcel SET address = ?1 WHERE number = ?2 AND status = ?3",
                rusqlite::params![address, number, STATUS_REGISTERED],
            )
            .map_err(from_rusqlite("parcel_set_address"))?;

        tracing::debug!(number, affected, "updated parcel address");

        Ok(())
    }

    /// Delete the parcel with the given number, only while it is still in
    /// the registered status
    ///
    /// A parcel in any other status is silently left in place.
    pub fn delete(&self, number: i64) -> Result<()> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM parcel WHERE number = ?1 AND status = ?2",
                rusqlite::params![number, STATUS_REGISTERED],
            )
            .map_err(from_rusqlite("parcel_delete"))?;

        tracing::debug!(number, affected, "deleted parcel");

        Ok(())
    }
}

/// Map one row to a parcel, in the fixed column order
/// `number, client, status, address, created_at`
fn map_parcel_row(row: &Row<'_>) -> rusqlite::Result<Parcel> {
    let number: i64 = row.get(0)?;
    let client: i64 = row.get(1)?;
    let status: String = row.get(2)?;
    let address: String = row.get(3)?;
    let created_at_text: String = row.get(4)?;

    let created_at = DateTime::parse_from_rfc3339(&created_at_text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(err),
            )
        })?;

    Ok(Parcel {
        number,
        client,
        status,
        address,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, schema};

    fn setup_test_db() -> Connection {
        let conn = db::open_in_memory().unwrap();
        schema::ensure_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_add_assigns_number() {
        let conn = setup_test_db();
        let repo = ParcelRepo::new(&conn);

        let first = repo.add(&Parcel::new(1, "a")).unwrap();
        let second = repo.add(&Parcel::new(1, "b")).unwrap();

        assert_ne!(first, 0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let conn = setup_test_db();
        let repo = ParcelRepo::new(&conn);

        let err = repo.get(12345).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_by_client_empty_is_ok() {
        let conn = setup_test_db();
        let repo = ParcelRepo::new(&conn);

        let parcels = repo.get_by_client(9999).unwrap();
        assert!(parcels.is_empty());
    }

    #[test]
    fn test_malformed_created_at_is_persistence_error() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (1, 'registered', 'x', 'not-a-timestamp')",
            [],
        )
        .unwrap();
        let number = conn.last_insert_rowid();

        let repo = ParcelRepo::new(&conn);
        let err = repo.get(number).unwrap_err();
        assert_eq!(err.code(), "ERR_PERSISTENCE");
    }
}
