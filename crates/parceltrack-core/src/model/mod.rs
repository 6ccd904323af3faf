//! Domain model for parcel tracking

pub mod parcel;

pub use parcel::{Parcel, STATUS_DELIVERED, STATUS_REGISTERED, STATUS_SENT};
