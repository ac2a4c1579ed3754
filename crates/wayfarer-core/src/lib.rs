//! Core library for the Wayfarer trip planning application.
//!
//! This crate provides the core business logic for planning and editing
//! travel itineraries, including progressive itinerary assembly, trip
//! storage, sharing, and error handling.
//!
//! # Progressive Assembly
//!
//! Planning a trip returns as soon as the core itinerary (title, budget,
//! day-by-day schedule) is ready. The remaining sections fill in one at a
//! time in the background, each failure isolated to its own section, and
//! every settled change is mirrored to storage so an interrupted run can
//! be resumed later.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (full reports vs. individual sections, edits vs. confirmations)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfarer_core::{
//!     display::ItineraryReport,
//!     params::{TravelStyle, TripParameters},
//!     TripPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = TripPlannerBuilder::new()
//!     .with_store_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! // Plan a trip; this returns once the core itinerary is ready
//! let params = TripParameters {
//!     destination: "Goa".to_string(),
//!     departure_city: "Mumbai".to_string(),
//!     start_date: date(2026, 3, 3),
//!     end_date: date(2026, 3, 7),
//!     travellers: 2,
//!     travel_style: TravelStyle::Standard,
//!     budget: Some(1500.0),
//!     interests: vec!["beaches".to_string()],
//! };
//! let trip = planner.plan_trip(&params).await?;
//!
//! // Sections keep settling in the background; wait them out, then render
//! trip.enriched().await;
//! let session = trip.snapshot().await;
//! println!("{}", ItineraryReport::new(&session));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use display::{
    EditResult, ItineraryReport, OperationStatus, SaveResult, SavedTripList, ShareResult,
};
pub use error::{Result, WayfarerError};
pub use generator::{GeneratorError, ItineraryGenerator, SampleGenerator};
pub use models::{
    Activity, ActivityKind, DayPlan, FacetSlot, ItineraryDocument, Priority, TravelAdvisory,
};
pub use params::{
    ReorderActivity, SelectFlight, SetPriority, ShareSelection, TravelStyle, TravellerPreferences,
    TripParameters,
};
pub use planner::{ShareLink, TripPlanner, TripPlannerBuilder};
pub use session::{Session, SessionHandle};
pub use store::{KvStore, MemoryStore, SavedTrip, SqliteStore, StoreError, TripStore};
