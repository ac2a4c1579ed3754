//! The trip storage adapter.
//!
//! [`TripStore`] owns the well-known keys and the policies around them:
//! mirroring is best-effort and never fails the caller, rehydration discards
//! records it cannot parse, and only user-initiated writes (shares, the
//! library, preferences) surface errors.

use log::warn;
use serde::{Deserialize, Serialize};

use super::{keys, KvStore};
use crate::error::{Result, StoreResultExt};
use crate::models::ItineraryDocument;
use crate::params::{TravellerPreferences, TripParameters};

/// A stored trip: the parameters it was planned from plus its document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    /// Parameters the trip was planned from
    pub details: TripParameters,
    /// Document snapshot, settled sections only
    pub itinerary: ItineraryDocument,
}

/// A named entry in the saved-trip library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrip {
    /// Name chosen at save time, unique within the library
    pub name: String,
    /// Parameters the trip was planned from
    pub details: TripParameters,
    /// Document snapshot, settled sections only
    pub itinerary: ItineraryDocument,
}

#[derive(Serialize)]
struct TripRecordRef<'a> {
    details: &'a TripParameters,
    itinerary: &'a ItineraryDocument,
}

/// Storage adapter for trips, shares, the library, and preferences.
pub struct TripStore {
    kv: Box<dyn KvStore>,
}

impl TripStore {
    /// Wraps a key-value backend in the trip storage policies.
    pub fn new<S: KvStore + 'static>(kv: S) -> Self {
        Self { kv: Box::new(kv) }
    }

    /// Mirrors the active trip to storage, best-effort.
    ///
    /// Called after every session mutation. Failures are logged and
    /// swallowed so a full or broken store never blocks planning.
    pub fn mirror(&self, details: &TripParameters, document: &ItineraryDocument, share_id: &str) {
        if let Err(err) = self.try_mirror(details, document, share_id) {
            warn!("Trip mirror failed, continuing without persistence: {err}");
        }
    }

    fn try_mirror(
        &self,
        details: &TripParameters,
        document: &ItineraryDocument,
        share_id: &str,
    ) -> Result<()> {
        let details_json = serde_json::to_string(details)?;
        let document_json = serde_json::to_string(document)?;
        let record_json = serde_json::to_string(&TripRecordRef {
            details,
            itinerary: document,
        })?;

        self.kv
            .put(keys::LAST_TRIP_DETAILS, &details_json)
            .store_context("Failed to write last trip details")?;
        self.kv
            .put(keys::LAST_ITINERARY, &document_json)
            .store_context("Failed to write last itinerary")?;
        self.kv
            .put(&keys::shared_trip(share_id), &record_json)
            .store_context("Failed to write the trip's share record")?;
        Ok(())
    }

    /// Loads the most recently active trip, if one is stored and readable.
    ///
    /// Corrupt or half-written state is discarded so the next call starts
    /// clean.
    pub fn load_last(&self) -> Option<TripRecord> {
        let details_raw = self.read_soft(keys::LAST_TRIP_DETAILS);
        let itinerary_raw = self.read_soft(keys::LAST_ITINERARY);
        match (details_raw, itinerary_raw) {
            (Some(details_raw), Some(itinerary_raw)) => {
                let parsed = (
                    serde_json::from_str(&details_raw),
                    serde_json::from_str(&itinerary_raw),
                );
                match parsed {
                    (Ok(details), Ok(itinerary)) => Some(TripRecord { details, itinerary }),
                    _ => {
                        warn!("Discarding unreadable stored trip");
                        self.clear_active();
                        None
                    }
                }
            }
            (None, None) => None,
            _ => {
                warn!("Discarding half-written stored trip");
                self.clear_active();
                None
            }
        }
    }

    /// Loads a shared trip by its token. Corrupt records are discarded.
    pub fn load_shared(&self, token: &str) -> Option<TripRecord> {
        let key = keys::shared_trip(token);
        let raw = self.read_soft(&key)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("Discarding unreadable share record '{key}': {err}");
                self.remove_soft(&key);
                None
            }
        }
    }

    /// Writes a share record under its token.
    ///
    /// Unlike mirroring this is user-initiated, so capacity and backend
    /// errors surface to the caller.
    pub fn save_share_record(
        &self,
        token: &str,
        details: &TripParameters,
        itinerary: &ItineraryDocument,
    ) -> Result<()> {
        let record_json = serde_json::to_string(&TripRecordRef { details, itinerary })?;
        self.kv
            .put(&keys::shared_trip(token), &record_json)
            .store_context("Failed to write share record")
    }

    /// Forgets the active trip. Saved trips, share records, and preferences
    /// are untouched.
    pub fn clear_active(&self) {
        for key in [keys::LAST_TRIP_DETAILS, keys::LAST_ITINERARY] {
            self.remove_soft(key);
        }
    }

    /// Returns the saved-trip library, oldest first.
    pub fn saved_trips(&self) -> Vec<SavedTrip> {
        let Some(raw) = self.read_soft(keys::SAVED_TRIPS) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(trips) => trips,
            Err(err) => {
                warn!("Discarding unreadable saved-trip library: {err}");
                self.remove_soft(keys::SAVED_TRIPS);
                Vec::new()
            }
        }
    }

    /// Replaces the saved-trip library.
    pub fn write_saved_trips(&self, trips: &[SavedTrip]) -> Result<()> {
        let raw = serde_json::to_string(trips)?;
        self.kv
            .put(keys::SAVED_TRIPS, &raw)
            .store_context("Failed to write saved trips")
    }

    /// Returns remembered traveller preferences, empty when absent or
    /// unreadable.
    pub fn preferences(&self) -> TravellerPreferences {
        let Some(raw) = self.read_soft(keys::TRAVELLER_PREFS) else {
            return TravellerPreferences::default();
        };
        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!("Discarding unreadable traveller preferences: {err}");
                self.remove_soft(keys::TRAVELLER_PREFS);
                TravellerPreferences::default()
            }
        }
    }

    /// Stores traveller preferences.
    pub fn save_preferences(&self, prefs: &TravellerPreferences) -> Result<()> {
        let raw = serde_json::to_string(prefs)?;
        self.kv
            .put(keys::TRAVELLER_PREFS, &raw)
            .store_context("Failed to write traveller preferences")
    }

    fn read_soft(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to read '{key}': {err}");
                None
            }
        }
    }

    fn remove_soft(&self, key: &str) {
        if let Err(err) = self.kv.remove(key) {
            warn!("Failed to remove '{key}': {err}");
        }
    }
}
