//! High-level planner API for assembling and managing trips.
//!
//! This module provides the main [`TripPlanner`] interface for the
//! progressive itinerary assembly system. The planner coordinates the
//! generator, the live session, and storage, implementing all business
//! logic for planning, enrichment, sharing, and the saved-trip library.
//!
//! # Architecture Overview
//!
//! A trip starts with one blocking core fetch. Everything else settles in
//! the background while callers already hold a usable document:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │  TripPlanner │───▶│  SessionHandle   │───▶│    TripStore    │
//! │ (operations) │    │  (live session)  │    │  (via store/)   │
//! └──────┬───────┘    └──────────────────┘    └─────────────────┘
//!        │ spawns               ▲
//!        ▼                      │ applies settled results
//! ┌─────────────────────────────┴───────────────────────────────┐
//! │ assembly: paced facet fetches, then sequential day images   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`TripPlanner`] instances
//! - [`sharing`]: Share links and the redaction that backs them
//! - `assembly`: Core fetch plus the paced facet pipeline
//! - `images`: Strictly sequential day-image enrichment
//! - `resume`: Rehydrating stored and shared trips
//! - `edits`: Activity-level mutations of the live document
//! - `library`: Saved trips, preferences, and forgetting the active trip
//!
//! ## Design Principles
//!
//! 1. **Progressive Results**: The document is usable the moment the core
//!    fetch lands; sections settle independently afterwards
//! 2. **Failure Isolation**: One failed section never takes down the trip
//! 3. **Supersession**: Planning again invalidates in-flight background
//!    work from the previous trip
//! 4. **Continuous Mirroring**: Every applied change is mirrored to
//!    storage, best-effort
//!
//! # Usage Examples
//!
//! ## Planning a Trip
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfarer_core::params::{TravelStyle, TripParameters};
//! use wayfarer_core::TripPlannerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new().build().await?;
//!
//! let params = TripParameters {
//!     destination: "Lisbon".to_string(),
//!     departure_city: "Berlin".to_string(),
//!     start_date: date(2026, 5, 4),
//!     end_date: date(2026, 5, 8),
//!     travellers: 2,
//!     travel_style: TravelStyle::Standard,
//!     budget: Some(1800.0),
//!     interests: vec!["food".to_string()],
//! };
//!
//! // Returns as soon as the day-by-day skeleton exists
//! let trip = planner.plan_trip(&params).await?;
//!
//! // Optionally wait for every section and image to settle
//! trip.enriched().await;
//! let document = trip.document().await;
//! println!("{} ({} days)", document.title, document.schedule.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Resuming and Sharing
//!
//! ```rust
//! use wayfarer_core::params::ShareSelection;
//! use wayfarer_core::TripPlannerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new().build().await?;
//!
//! if let Some(trip) = planner.resume_last().await? {
//!     // Publish everything except the budget
//!     let selection = ShareSelection {
//!         budget: false,
//!         ..ShareSelection::default()
//!     };
//!     let link = planner.share(&trip, &selection).await?;
//!     println!("{}", link.url);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::generator::ItineraryGenerator;
use crate::session::{Session, SessionHandle};
use crate::store::TripStore;

// Module declarations
mod assembly;
pub mod builder;
mod edits;
mod images;
mod library;
mod resume;
pub mod sharing;


// Re-export the main types
pub use builder::TripPlannerBuilder;
pub use sharing::ShareLink;

/// Default pause before each background facet fetch.
pub const FACET_PACING: Duration = Duration::from_millis(1200);

/// Default pause between consecutive day-image fetches.
pub const IMAGE_PACING: Duration = Duration::from_millis(1500);

/// Pacing between background fetches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pacing {
    pub(crate) facet_delay: Duration,
    pub(crate) image_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            facet_delay: FACET_PACING,
            image_delay: IMAGE_PACING,
        }
    }
}

/// Main planner interface for assembling and managing trips.
pub struct TripPlanner {
    pub(crate) generator: Arc<dyn ItineraryGenerator>,
    pub(crate) store: Arc<TripStore>,
    pub(crate) pacing: Pacing,
    generations: Arc<AtomicU64>,
}

impl TripPlanner {
    /// Creates a planner over the given generator and store.
    pub(crate) fn new(
        generator: Arc<dyn ItineraryGenerator>,
        store: TripStore,
        pacing: Pacing,
    ) -> Self {
        Self {
            generator,
            store: Arc::new(store),
            pacing,
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Installs a session as current, superseding any previous one. The
    /// returned sender marks the session's enrichment as finished.
    pub(crate) fn install_session(
        &self,
        session: Session,
    ) -> (SessionHandle, watch::Sender<bool>) {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        SessionHandle::new(
            session,
            Arc::clone(&self.store),
            generation,
            Arc::clone(&self.generations),
        )
    }

    /// Invalidates the current session without installing a new one.
    pub(crate) fn supersede(&self) {
        self.generations.fetch_add(1, Ordering::SeqCst);
    }
}
