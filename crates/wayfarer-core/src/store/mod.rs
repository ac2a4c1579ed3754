//! Persistence for trips, the saved-trip library, and preferences.
//!
//! Storage is a small string-keyed record store with two backends:
//! [`SqliteStore`] for durable on-disk state and [`MemoryStore`] for tests.
//! On top of the raw [`KvStore`] contract sits [`TripStore`], the adapter
//! that knows the well-known keys, mirrors the active session after every
//! mutation, and rehydrates sessions on startup.
//!
//! Reads are deliberately forgiving: a record that fails to parse is logged,
//! discarded, and treated as absent, so a damaged store never wedges the
//! planner. Writes that matter to the caller (share records, the library)
//! propagate their errors instead.

pub mod memory;
pub mod sqlite;
pub mod trips;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use trips::{SavedTrip, TripRecord, TripStore};

use thiserror::Error;

/// Well-known record keys.
pub mod keys {
    /// Parameters of the most recently active trip.
    pub const LAST_TRIP_DETAILS: &str = "lastTripDetails";
    /// Document snapshot of the most recently active trip.
    pub const LAST_ITINERARY: &str = "lastItinerary";
    /// The saved-trip library, stored as one JSON array.
    pub const SAVED_TRIPS: &str = "savedTrips";
    /// Remembered traveller preferences.
    pub const TRAVELLER_PREFS: &str = "travellerPrefs";
    /// Prefix for per-token share records.
    pub const SHARED_TRIP_PREFIX: &str = "trip_";

    /// Returns the record key for one share token.
    #[must_use]
    pub fn shared_trip(token: &str) -> String {
        format!("{SHARED_TRIP_PREFIX}{token}")
    }
}

/// Errors produced by key-value backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend refused a write because its capacity is exhausted.
    #[error("Storage capacity exceeded while writing '{key}'")]
    CapacityExceeded {
        /// Key whose write was refused
        key: String,
    },

    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

/// Minimal string-keyed storage contract.
///
/// Values are opaque strings; the adapter layer decides what goes in them
/// (JSON, in practice). Implementations must tolerate concurrent use from
/// multiple handles.
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
