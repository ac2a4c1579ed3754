//! The generation boundary.
//!
//! Everything the planner asks of an external itinerary generator goes
//! through the [`ItineraryGenerator`] trait: the mandatory core fetch, the
//! six facet fetches, and per-day image generation. The planner never knows
//! what sits behind the trait; implementations can call a hosted model,
//! read fixtures, or synthesize content locally.
//!
//! Implementations own the parse-and-validate step for whatever wire format
//! they speak. By the time a value crosses this boundary it is fully typed;
//! anything that cannot be represented must surface as a
//! [`GeneratorError`] instead of a half-filled model.
//!
//! The crate ships one implementation, [`SampleGenerator`], which derives a
//! plausible itinerary deterministically from the trip parameters and never
//! fails. It backs the CLI out of the box and keeps tests hermetic.

mod sample;

pub use sample::SampleGenerator;

use async_trait::async_trait;
use jiff::civil::Date;
use thiserror::Error;

use crate::models::{
    AccommodationOptions, CoreItinerary, DayPlan, FoodGuide, ImageRef, LocationPoint,
    TransportationGuide, TravelAdvisory, WeatherReport,
};
use crate::params::TripParameters;

/// Errors produced at the generation boundary.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The generator could not produce the requested content at all
    #[error("{facet} generation failed: {message}")]
    Failed { facet: String, message: String },

    /// The generator answered, but the content failed validation
    #[error("Generator returned malformed {facet} data: {reason}")]
    Malformed { facet: String, reason: String },
}

impl GeneratorError {
    /// A failed fetch for the named facet.
    pub fn failed(facet: impl Into<String>, message: impl Into<String>) -> Self {
        GeneratorError::Failed {
            facet: facet.into(),
            message: message.into(),
        }
    }

    /// A fetch that produced unusable content for the named facet.
    pub fn malformed(facet: impl Into<String>, reason: impl Into<String>) -> Self {
        GeneratorError::Malformed {
            facet: facet.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for generator operations.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Source of generated itinerary content.
///
/// The assembly pipeline calls these methods one at a time, in a fixed
/// order, and treats each failure in isolation: a failed facet never stops
/// the facets behind it. Only [`core_itinerary`](Self::core_itinerary) is
/// fatal to planning as a whole.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Produce the mandatory core section: title, costs, summary, and the
    /// full day-by-day schedule.
    async fn core_itinerary(&self, params: &TripParameters) -> GeneratorResult<CoreItinerary>;

    /// Hotel recommendations in three budget tiers.
    async fn accommodation(&self, params: &TripParameters)
        -> GeneratorResult<AccommodationOptions>;

    /// Long-distance and local transportation guidance.
    async fn transportation(&self, params: &TripParameters)
        -> GeneratorResult<TransportationGuide>;

    /// Restaurant recommendations and food guidance.
    async fn food(&self, params: &TripParameters) -> GeneratorResult<FoodGuide>;

    /// Weather outlook covering every day between `start_date` and
    /// `end_date`, inclusive.
    async fn weather(
        &self,
        destination: &str,
        start_date: Date,
        end_date: Date,
    ) -> GeneratorResult<WeatherReport>;

    /// Safety and disruption notices for the destination and window.
    async fn advisories(
        &self,
        destination: &str,
        start_date: Date,
        end_date: Date,
    ) -> GeneratorResult<Vec<TravelAdvisory>>;

    /// Mappable points of interest extracted from an already-generated
    /// schedule.
    async fn locations(
        &self,
        schedule: &[DayPlan],
        destination: &str,
    ) -> GeneratorResult<Vec<LocationPoint>>;

    /// One illustrative image for a day, described by `prompt`.
    async fn day_image(&self, prompt: &str) -> GeneratorResult<ImageRef>;
}
