//! Builder for creating and configuring TripPlanner instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::task;

use super::{Pacing, TripPlanner};
use crate::{
    error::{Result, StoreResultExt, WayfarerError},
    generator::{ItineraryGenerator, SampleGenerator},
    store::{KvStore, SqliteStore, TripStore},
};

/// Builder for creating and configuring TripPlanner instances.
pub struct TripPlannerBuilder {
    store_path: Option<PathBuf>,
    store: Option<TripStore>,
    generator: Option<Arc<dyn ItineraryGenerator>>,
    pacing: Pacing,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store_path: None,
            store: None,
            generator: None,
            pacing: Pacing::default(),
        }
    }

    /// Sets a custom store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfarer/wayfarer.db` or `~/.local/share/wayfarer/wayfarer.db`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given key-value backend instead of opening SQLite storage.
    pub fn with_store<S: KvStore + 'static>(mut self, kv: S) -> Self {
        self.store = Some(TripStore::new(kv));
        self
    }

    /// Replaces the default itinerary generator.
    pub fn with_generator<G: ItineraryGenerator + 'static>(mut self, generator: G) -> Self {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Overrides the pauses between background fetches. Mostly useful for
    /// tests that cannot afford real pacing.
    pub fn with_pacing(mut self, facet_delay: Duration, image_delay: Duration) -> Self {
        self.pacing = Pacing {
            facet_delay,
            image_delay,
        };
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::FileSystem` if the store path is invalid
    /// Returns `WayfarerError::Storage` if store initialization fails
    pub async fn build(self) -> Result<TripPlanner> {
        let store = match self.store {
            Some(store) => store,
            None => {
                let path = if let Some(path) = self.store_path {
                    path
                } else {
                    Self::default_store_path()?
                };

                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| WayfarerError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                let sqlite = task::spawn_blocking(move || SqliteStore::open(&path))
                    .await
                    .map_err(|e| WayfarerError::Configuration {
                        message: format!("Task join error: {e}"),
                    })?
                    .store_context("Failed to open the trip store")?;
                TripStore::new(sqlite)
            }
        };

        let generator = self
            .generator
            .unwrap_or_else(|| Arc::new(SampleGenerator::default()));
        Ok(TripPlanner::new(generator, store, self.pacing))
    }

    /// Returns the default store path following XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("wayfarer.db")
            .map_err(|e| WayfarerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TripPlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
