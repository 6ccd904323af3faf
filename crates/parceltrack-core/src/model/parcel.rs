use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a freshly created parcel. Address changes and deletion are
/// only permitted while a parcel is still in this status.
pub const STATUS_REGISTERED: &str = "registered";

/// Status of a parcel handed over for delivery
pub const STATUS_SENT: &str = "sent";

/// Status of a parcel that reached its recipient
pub const STATUS_DELIVERED: &str = "delivered";

/// Parcel - one shipment record
///
/// A parcel is constructed in memory without a number, persisted (receiving
/// a store-assigned number), and from then on identified by that number.
/// The status field is free-form at this layer; the canonical values above
/// are what the rest of the system uses, and only `STATUS_REGISTERED`
/// participates in gating logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-assigned identifier; 0 before persistence, stable afterwards
    pub number: i64,

    /// Opaque integer identifying the owning client; not a foreign key
    pub client: i64,

    /// Current status
    pub status: String,

    /// Delivery address
    pub address: String,

    /// Timestamp captured at construction, persisted as RFC3339 text
    pub created_at: DateTime<Utc>,
}

impl Parcel {
    /// Create a new, not-yet-persisted parcel for the given client
    ///
    /// The parcel starts in `STATUS_REGISTERED` with `number == 0`; the
    /// store assigns the real number on insert.
    pub fn new(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: STATUS_REGISTERED.to_string(),
            address: address.into(),
            created_at: Utc::now(),
        }
    }

    /// Check whether this parcel is still in the registered status
    pub fn is_registered(&self) -> bool {
        self.status == STATUS_REGISTERED
    }

    /// Check whether this parcel has been persisted
    pub fn is_persisted(&self) -> bool {
        self.number != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parcel_defaults() {
        let parcel = Parcel::new(1000, "5 Main St");
        assert_eq!(parcel.number, 0);
        assert_eq!(parcel.client, 1000);
        assert_eq!(parcel.status, STATUS_REGISTERED);
        assert_eq!(parcel.address, "5 Main St");
        assert!(parcel.is_registered());
        assert!(!parcel.is_persisted());
    }

    #[test]
    fn test_registered_predicate_tracks_status() {
        let mut parcel = Parcel::new(1, "somewhere");
        parcel.status = STATUS_SENT.to_string();
        assert!(!parcel.is_registered());
    }
}
