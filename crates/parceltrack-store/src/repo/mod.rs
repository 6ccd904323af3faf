//! Repository layer mapping parcel records to SQLite rows

pub mod parcel_repo;

pub use parcel_repo::ParcelRepo;
