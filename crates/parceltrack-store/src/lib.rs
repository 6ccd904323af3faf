//! Parceltrack Store - SQLite persistence for parcel records
//!
//! Provides:
//! - Connection helpers for opening and configuring SQLite
//! - The parcel table schema collaborator
//! - `ParcelRepo`, the repository mapping `Parcel` records to rows
//!
//! The repository operates on an externally supplied, already-open
//! connection; it owns no connection lifecycle, performs no transactions,
//! and delegates all consistency guarantees to SQLite.

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use parceltrack_core::{Parcel, Result, TrackError};
pub use repo::ParcelRepo;
