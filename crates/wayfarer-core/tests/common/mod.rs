//! Shared scaffolding for the planner integration tests.
//!
//! The centerpiece is [`ScriptedGenerator`], a wrapper around the crate's
//! deterministic [`SampleGenerator`] that records every fetch as it happens
//! and can be scripted to fail specific ones. With tokio's paused clock the
//! recorded timestamps are exact, which lets tests assert the pipeline's
//! pacing rather than approximate it.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jiff::civil::{date, Date};
use tokio::time::Instant;
use wayfarer_core::generator::{
    GeneratorError, GeneratorResult, ItineraryGenerator, SampleGenerator,
};
use wayfarer_core::models::{
    AccommodationOptions, CoreItinerary, DayPlan, FoodGuide, ImageRef, LocationPoint,
    TransportationGuide, TravelAdvisory, WeatherReport,
};
use wayfarer_core::params::{TravelStyle, TripParameters};
use wayfarer_core::store::MemoryStore;
use wayfarer_core::{TripPlanner, TripPlannerBuilder};

/// Every generator call a test observed, in order, with its timestamp.
#[derive(Clone, Default)]
pub struct FetchLog {
    events: Arc<Mutex<Vec<(String, Instant)>>>,
}

impl FetchLog {
    fn record(&self, what: &str) {
        self.events
            .lock()
            .expect("fetch log lock")
            .push((what.to_string(), Instant::now()));
    }

    /// Calls recorded so far, oldest first.
    pub fn events(&self) -> Vec<(String, Instant)> {
        self.events.lock().expect("fetch log lock").clone()
    }

    /// Just the call names, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|(what, _)| what).collect()
    }
}

/// A generator that answers like [`SampleGenerator`] but records every call
/// and fails the ones a test scripts to fail.
///
/// Fetches are named `core`, `accommodation`, `transportation`, `food`,
/// `weather`, `advisories`, `locations`, and `image`.
pub struct ScriptedGenerator {
    inner: SampleGenerator,
    failing: HashSet<String>,
    failing_image_marker: Option<String>,
    log: FetchLog,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            inner: SampleGenerator::default(),
            failing: HashSet::new(),
            failing_image_marker: None,
            log: FetchLog::default(),
        }
    }

    /// Scripts the named fetches to fail.
    pub fn failing(mut self, fetches: &[&str]) -> Self {
        self.failing = fetches.iter().map(|f| (*f).to_string()).collect();
        self
    }

    /// Scripts image fetches whose prompt contains `marker` to fail,
    /// leaving other days' images untouched.
    pub fn failing_image_containing(mut self, marker: &str) -> Self {
        self.failing_image_marker = Some(marker.to_string());
        self
    }

    /// A handle on the log that stays valid after the generator moves into
    /// the planner.
    pub fn log(&self) -> FetchLog {
        self.log.clone()
    }

    fn settle<T>(&self, what: &str, value: GeneratorResult<T>) -> GeneratorResult<T> {
        self.log.record(what);
        if self.failing.contains(what) {
            return Err(GeneratorError::failed(what, "scripted failure"));
        }
        value
    }
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItineraryGenerator for ScriptedGenerator {
    async fn core_itinerary(&self, params: &TripParameters) -> GeneratorResult<CoreItinerary> {
        let value = self.inner.core_itinerary(params).await;
        self.settle("core", value)
    }

    async fn accommodation(
        &self,
        params: &TripParameters,
    ) -> GeneratorResult<AccommodationOptions> {
        let value = self.inner.accommodation(params).await;
        self.settle("accommodation", value)
    }

    async fn transportation(
        &self,
        params: &TripParameters,
    ) -> GeneratorResult<TransportationGuide> {
        let value = self.inner.transportation(params).await;
        self.settle("transportation", value)
    }

    async fn food(&self, params: &TripParameters) -> GeneratorResult<FoodGuide> {
        let value = self.inner.food(params).await;
        self.settle("food", value)
    }

    async fn weather(
        &self,
        destination: &str,
        start_date: Date,
        end_date: Date,
    ) -> GeneratorResult<WeatherReport> {
        let value = self.inner.weather(destination, start_date, end_date).await;
        self.settle("weather", value)
    }

    async fn advisories(
        &self,
        destination: &str,
        start_date: Date,
        end_date: Date,
    ) -> GeneratorResult<Vec<TravelAdvisory>> {
        let value = self
            .inner
            .advisories(destination, start_date, end_date)
            .await;
        self.settle("advisories", value)
    }

    async fn locations(
        &self,
        schedule: &[DayPlan],
        destination: &str,
    ) -> GeneratorResult<Vec<LocationPoint>> {
        let value = self.inner.locations(schedule, destination).await;
        self.settle("locations", value)
    }

    async fn day_image(&self, prompt: &str) -> GeneratorResult<ImageRef> {
        let value = self.inner.day_image(prompt).await;
        if let Some(marker) = &self.failing_image_marker {
            if prompt.contains(marker.as_str()) {
                self.log.record("image");
                return Err(GeneratorError::failed("image", "scripted failure"));
            }
        }
        self.settle("image", value)
    }
}

/// Three-day parameters used across the integration tests.
pub fn three_day_params() -> TripParameters {
    TripParameters {
        destination: "Goa".to_string(),
        departure_city: "Mumbai".to_string(),
        start_date: date(2026, 3, 3),
        end_date: date(2026, 3, 5),
        travellers: 2,
        travel_style: TravelStyle::Standard,
        budget: Some(1500.0),
        interests: vec!["beaches".to_string(), "food".to_string()],
    }
}

/// Builds a planner over an existing backing store, so tests can simulate
/// a restart by building a second planner over the same store.
pub async fn planner_over(
    store: MemoryStore,
    generator: ScriptedGenerator,
    facet_delay: Duration,
    image_delay: Duration,
) -> TripPlanner {
    TripPlannerBuilder::new()
        .with_store(store)
        .with_generator(generator)
        .with_pacing(facet_delay, image_delay)
        .build()
        .await
        .expect("Failed to create planner")
}

/// Builds a planner over a fresh in-memory store, returning the store
/// handle and fetch log alongside it.
pub async fn planner_with(
    generator: ScriptedGenerator,
    facet_delay: Duration,
    image_delay: Duration,
) -> (TripPlanner, MemoryStore, FetchLog) {
    let store = MemoryStore::new();
    let log = generator.log();
    let planner = planner_over(store.clone(), generator, facet_delay, image_delay).await;
    (planner, store, log)
}
