//! The saved-trip library, preferences, and forgetting the active trip.

use super::sharing::mint_share_token;
use super::TripPlanner;
use crate::error::{Result, WayfarerError};
use crate::params::TravellerPreferences;
use crate::session::SessionHandle;
use crate::store::{SavedTrip, TripRecord};

impl TripPlanner {
    /// Saves the current trip under a name. Names are unique within the
    /// library, compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::InvalidInput` for a blank name and
    /// `WayfarerError::DuplicateSavedTrip` when the name is taken.
    pub async fn save_trip(&self, trip: &SessionHandle, name: &str) -> Result<SavedTrip> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WayfarerError::invalid_input("name").with_reason("Name must not be empty"));
        }

        let session = trip.snapshot().await;
        let mut library = self.store.saved_trips();
        if library.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(WayfarerError::DuplicateSavedTrip {
                name: name.to_string(),
            });
        }

        let entry = SavedTrip {
            name: name.to_string(),
            details: session.params().clone(),
            itinerary: session.document().clone(),
        };
        library.push(entry.clone());
        self.store.write_saved_trips(&library)?;
        Ok(entry)
    }

    /// Returns the saved-trip library, oldest first.
    pub fn saved_trips(&self) -> Vec<SavedTrip> {
        self.store.saved_trips()
    }

    /// Loads a library entry as the active trip. Positions are 1-based,
    /// matching the library listing.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::SavedTripNotFound` for a position outside
    /// the library.
    pub async fn load_saved(&self, position: usize) -> Result<SessionHandle> {
        let mut library = self.store.saved_trips();
        if position == 0 || position > library.len() {
            return Err(WayfarerError::SavedTripNotFound { index: position });
        }
        let entry = library.swap_remove(position - 1);
        let record = TripRecord {
            details: entry.details,
            itinerary: entry.itinerary,
        };
        Ok(self.install_rehydrated(record, mint_share_token()).await)
    }

    /// Remembered traveller preferences, empty when none are stored.
    pub fn preferences(&self) -> TravellerPreferences {
        self.store.preferences()
    }

    /// Stores traveller preferences for future planning runs.
    pub fn save_preferences(&self, prefs: &TravellerPreferences) -> Result<()> {
        self.store.save_preferences(prefs)
    }

    /// Forgets the active trip and stands down any background work still
    /// running for it. Saved trips, share records, and preferences are
    /// untouched.
    pub fn clear_active(&self) {
        self.supersede();
        self.store.clear_active();
    }
}
