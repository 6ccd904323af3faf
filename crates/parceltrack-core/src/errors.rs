use thiserror::Error;

/// Result type alias using TrackError
pub type Result<T> = std::result::Result<T, TrackError>;

/// Error taxonomy for parcel persistence operations
///
/// Two kinds reach callers: a single-row fetch that matched zero rows
/// (`NotFound`), and everything else the backing store can report
/// (`Persistence`). Conditional updates and deletes that affect zero rows
/// are not errors; see `ParcelRepo` in `parceltrack-store`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    /// No parcel row exists for the requested number
    #[error("parcel not found: {number}")]
    NotFound { number: i64 },

    /// The backing store failed: connection, statement, or row iteration
    #[error("persistence failure in '{op}': {message}")]
    Persistence { op: String, message: String },
}

impl TrackError {
    /// Build a not-found error for the given parcel number
    pub fn not_found(number: i64) -> Self {
        TrackError::NotFound { number }
    }

    /// Build a persistence error with operation context
    pub fn persistence(op: impl Into<String>, message: impl Into<String>) -> Self {
        TrackError::Persistence {
            op: op.into(),
            message: message.into(),
        }
    }

    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TrackError::NotFound { .. } => "ERR_NOT_FOUND",
            TrackError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }

    /// Check whether this is the zero-row single-fetch case
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(TrackError::not_found(7).code(), "ERR_NOT_FOUND");
        assert_eq!(
            TrackError::persistence("parcel_add", "disk I/O error").code(),
            "ERR_PERSISTENCE"
        );
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(TrackError::not_found(42).is_not_found());
        assert!(!TrackError::persistence("parcel_get", "boom").is_not_found());
    }

    #[test]
    fn test_display_carries_context() {
        let err = TrackError::persistence("parcel_delete", "database is locked");
        let rendered = err.to_string();
        assert!(rendered.contains("parcel_delete"));
        assert!(rendered.contains("database is locked"));
    }
}
