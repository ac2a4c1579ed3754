//! Data models for itinerary documents and their facets.
//!
//! This module contains the core domain models for the Wayfarer trip
//! planner. Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! # Document Shape
//!
//! An [`ItineraryDocument`] is built in two phases:
//!
//! 1. **Core section**: title, costs, summary, and the day-by-day
//!    schedule, produced atomically as a [`CoreItinerary`] by the
//!    mandatory first fetch
//! 2. **Facets**: accommodation, transportation, food, and weather, each
//!    fetched independently afterwards and tracked by a [`FacetSlot`]
//!
//! The [`FacetSlot`] tri-state (`Pending` / `Ready` / `Missing`) is what
//! makes progressive assembly observable: a facet can never hold data and
//! a loading flag at the same time, and durable snapshots keep only the
//! `Ready` payloads.
//!
//! Travel advisories ([`TravelAdvisory`]) and map locations
//! ([`LocationPoint`]) are fetched in the same pipeline but live on the
//! session rather than the document, so they never reach storage.
//!
//! # Examples
//!
//! ```rust
//! use wayfarer_core::models::{Activity, ActivityKind, FacetSlot, Priority};
//!
//! let activity = Activity {
//!     time: "09:00".to_string(),
//!     description: "Walk the old quarter".to_string(),
//!     kind: ActivityKind::Sightseeing,
//!     estimated_cost: 12.0,
//!     priority: Priority::High,
//!     travel_details: None,
//!     selected_flight: None,
//! };
//! assert_eq!(activity.kind.as_str(), "Sightseeing");
//!
//! // Slots distinguish "still loading" from "settled without data".
//! let weather: FacetSlot<u32> = FacetSlot::Pending;
//! assert!(!weather.is_settled());
//! ```

pub mod advisory;
pub mod dining;
pub mod itinerary;
pub mod schedule;
pub mod slot;
pub mod stay;
pub mod transit;
pub mod weather;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use advisory::{AdvisorySeverity, LocationPoint, TravelAdvisory};
pub use dining::{FoodGuide, PriceRange, Restaurant};
pub use itinerary::{CoreItinerary, CostBreakdown, ItineraryDocument, TripSummary};
pub use schedule::{
    Activity, ActivityKind, DayPlan, FlightSelection, ImageRef, Priority, TravelDetails,
};
pub use slot::FacetSlot;
pub use stay::{AccommodationOptions, Hotel};
pub use transit::{LocalSuggestion, TransportationGuide, TransportationOption};
pub use weather::{DailyForecast, WeatherReport};
