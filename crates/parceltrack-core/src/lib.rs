//! Parceltrack Core - Domain model and error taxonomy
//!
//! Provides:
//! - The `Parcel` record and its canonical status values
//! - The `TrackError` taxonomy shared by all persistence operations
//!
//! This crate has no database dependency; persistence lives in
//! `parceltrack-store`.

pub mod errors;
pub mod model;

// Re-export key types
pub use errors::{Result, TrackError};
pub use model::Parcel;
