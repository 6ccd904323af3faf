//! Error handling for parceltrack-store
//!
//! Wraps parceltrack-core TrackError with store-specific helpers

use parceltrack_core::TrackError;

/// Result type alias using TrackError
pub type Result<T> = parceltrack_core::Result<T>;

/// Classify a rusqlite error as a persistence failure with operation context
pub fn from_rusqlite(op: &'static str) -> impl FnOnce(rusqlite::Error) -> TrackError {
    move |err| TrackError::persistence(op, err.to_string())
}

/// Create a not-found error for a parcel number
pub fn parcel_not_found(number: i64) -> TrackError {
    TrackError::not_found(number)
}
