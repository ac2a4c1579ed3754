//! The active trip session and the handle the planner hands out.
//!
//! A [`Session`] is one trip being assembled or revisited: the parameters it
//! was planned from, the document as far as it has settled, and the
//! session-scoped extras (advisories and map locations) that never persist.
//!
//! Callers hold a [`SessionHandle`]. Handles are cheap to clone and all
//! clones address the same session; each handle also carries the generation
//! token it was minted under, so background work belonging to a superseded
//! session can recognize that and stand down instead of writing into state
//! the user has already replaced.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use crate::error::{Result, WayfarerError};
use crate::models::{
    AccommodationOptions, Activity, ActivityKind, DayPlan, FacetSlot, FlightSelection, FoodGuide,
    ImageRef, ItineraryDocument, LocationPoint, TransportationGuide, TravelAdvisory, WeatherReport,
};
use crate::params::{ReorderActivity, SelectFlight, SetPriority, TripParameters};
use crate::store::TripStore;

/// One settled facet fetch, ready to be applied to a session.
#[derive(Debug, Clone)]
pub(crate) enum FacetUpdate {
    Accommodation(FacetSlot<AccommodationOptions>),
    Transportation(FacetSlot<TransportationGuide>),
    Food(FacetSlot<FoodGuide>),
    Weather(FacetSlot<WeatherReport>),
    Advisories(FacetSlot<Vec<TravelAdvisory>>),
    Locations(FacetSlot<Vec<LocationPoint>>),
}

/// State of one trip: parameters, document, and session-scoped extras.
#[derive(Debug, Clone)]
pub struct Session {
    params: TripParameters,
    document: ItineraryDocument,
    advisories: FacetSlot<Vec<TravelAdvisory>>,
    locations: FacetSlot<Vec<LocationPoint>>,
    share_id: String,
}

impl Session {
    /// A freshly planned session whose extras are still being fetched.
    pub(crate) fn started(
        params: TripParameters,
        document: ItineraryDocument,
        share_id: String,
    ) -> Self {
        Self {
            params,
            document,
            advisories: FacetSlot::Pending,
            locations: FacetSlot::Pending,
            share_id,
        }
    }

    /// A session rebuilt from storage. Extras are never persisted, so they
    /// come back unavailable rather than pretending a fetch is in flight.
    pub(crate) fn rehydrated(
        params: TripParameters,
        document: ItineraryDocument,
        share_id: String,
    ) -> Self {
        Self {
            params,
            document,
            advisories: FacetSlot::Missing,
            locations: FacetSlot::Missing,
            share_id,
        }
    }

    /// Parameters the trip was planned from.
    pub fn params(&self) -> &TripParameters {
        &self.params
    }

    /// The itinerary document as far as it has settled.
    pub fn document(&self) -> &ItineraryDocument {
        &self.document
    }

    /// Travel advisories for the destination, session-scoped.
    pub fn advisories(&self) -> &FacetSlot<Vec<TravelAdvisory>> {
        &self.advisories
    }

    /// Map locations matching the schedule, session-scoped.
    pub fn locations(&self) -> &FacetSlot<Vec<LocationPoint>> {
        &self.locations
    }

    /// Token this session's share record is stored under.
    pub fn share_id(&self) -> &str {
        &self.share_id
    }

    pub(crate) fn apply_facet(&mut self, update: FacetUpdate) {
        match update {
            FacetUpdate::Accommodation(slot) => self.document.accommodation = slot,
            FacetUpdate::Transportation(slot) => self.document.transportation = slot,
            FacetUpdate::Food(slot) => self.document.food = slot,
            FacetUpdate::Weather(slot) => self.document.weather = slot,
            FacetUpdate::Advisories(slot) => self.advisories = slot,
            FacetUpdate::Locations(slot) => self.locations = slot,
        }
    }

    pub(crate) fn mark_images_pending(&mut self) {
        for day in &mut self.document.schedule {
            day.image = FacetSlot::Pending;
        }
    }

    pub(crate) fn apply_day_image(&mut self, day: u32, image: FacetSlot<ImageRef>) {
        if let Some(plan) = self.document.day_mut(day) {
            plan.image = image;
        }
    }

    /// Moves an activity to a new position within its day.
    pub(crate) fn reorder_activity(&mut self, params: &ReorderActivity) -> Result<DayPlan> {
        params.validate()?;
        let day = self.document.day_mut(params.from_day).ok_or_else(|| {
            WayfarerError::invalid_input("from_day")
                .with_reason(format!("No day {} in this trip", params.from_day))
        })?;
        let count = day.activities.len();
        if params.from_index >= count {
            return Err(WayfarerError::invalid_input("from_index").with_reason(format!(
                "Day {} has no activity at position {}",
                params.from_day, params.from_index
            )));
        }
        if params.to_index >= count {
            return Err(WayfarerError::invalid_input("to_index").with_reason(format!(
                "Day {} has no position {}",
                params.to_day, params.to_index
            )));
        }
        let activity = day.activities.remove(params.from_index);
        day.activities.insert(params.to_index, activity);
        Ok(day.clone())
    }

    /// Sets the priority of one activity.
    pub(crate) fn set_priority(&mut self, params: &SetPriority) -> Result<Activity> {
        let day = self.document.day_mut(params.day).ok_or_else(|| {
            WayfarerError::invalid_input("day")
                .with_reason(format!("No day {} in this trip", params.day))
        })?;
        let activity = day.activities.get_mut(params.activity).ok_or_else(|| {
            WayfarerError::invalid_input("activity").with_reason(format!(
                "Day {} has no activity at position {}",
                params.day, params.activity
            ))
        })?;
        activity.priority = params.priority;
        Ok(activity.clone())
    }

    /// Pins a chosen flight on a travel activity and reprices it for the
    /// whole party.
    pub(crate) fn select_flight(&mut self, params: &SelectFlight) -> Result<Activity> {
        params.validate()?;
        let travellers = self.params.travellers;
        let day = self.document.day_mut(params.day).ok_or_else(|| {
            WayfarerError::invalid_input("day")
                .with_reason(format!("No day {} in this trip", params.day))
        })?;
        let activity = day.activities.get_mut(params.activity).ok_or_else(|| {
            WayfarerError::invalid_input("activity").with_reason(format!(
                "Day {} has no activity at position {}",
                params.day, params.activity
            ))
        })?;
        if activity.kind != ActivityKind::Travel {
            return Err(WayfarerError::invalid_input("activity")
                .with_reason("Only travel activities can carry a flight selection"));
        }
        activity.selected_flight = Some(FlightSelection {
            airline: params.airline.clone(),
            departure_time: params.departure_time.clone(),
            arrival_time: params.arrival_time.clone(),
        });
        activity.estimated_cost = round2(params.price * f64::from(travellers));
        Ok(activity.clone())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shared handle to a session.
///
/// Mutations go through the handle so every change is mirrored to storage
/// under the session lock. Pipeline work uses [`apply_if_current`]
/// (re-checking the generation inside the lock) so results belonging to a
/// superseded session are dropped instead of applied.
///
/// [`apply_if_current`]: SessionHandle::apply_if_current
#[derive(Clone)]
pub struct SessionHandle {
    session: Arc<Mutex<Session>>,
    store: Arc<TripStore>,
    generation: u64,
    current: Arc<AtomicU64>,
    enrichment: watch::Receiver<bool>,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("session", &self.session)
            .field("generation", &self.generation)
            .field("current", &self.current)
            .field("enrichment", &self.enrichment)
            .finish_non_exhaustive()
    }
}

impl SessionHandle {
    pub(crate) fn new(
        session: Session,
        store: Arc<TripStore>,
        generation: u64,
        current: Arc<AtomicU64>,
    ) -> (Self, watch::Sender<bool>) {
        let (done_tx, done_rx) = watch::channel(false);
        let handle = Self {
            session: Arc::new(Mutex::new(session)),
            store,
            generation,
            current,
            enrichment: done_rx,
        };
        (handle, done_tx)
    }

    /// True while no newer session has been installed.
    pub fn is_current(&self) -> bool {
        self.generation == self.current.load(Ordering::SeqCst)
    }

    /// Waits until the background enrichment behind this session has
    /// finished, either by completing or by standing down.
    pub async fn enriched(&self) {
        let mut rx = self.enrichment.clone();
        let _ = rx.wait_for(|done| *done).await;
    }

    /// Clone of the whole session.
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Clone of the current document.
    pub async fn document(&self) -> ItineraryDocument {
        self.session.lock().await.document.clone()
    }

    /// Clone of the trip parameters.
    pub async fn params(&self) -> TripParameters {
        self.session.lock().await.params.clone()
    }

    /// Clone of the session-scoped advisories.
    pub async fn advisories(&self) -> FacetSlot<Vec<TravelAdvisory>> {
        self.session.lock().await.advisories.clone()
    }

    /// Clone of the session-scoped map locations.
    pub async fn locations(&self) -> FacetSlot<Vec<LocationPoint>> {
        self.session.lock().await.locations.clone()
    }

    /// Token this session's share record is stored under.
    pub async fn share_id(&self) -> String {
        self.session.lock().await.share_id.clone()
    }

    /// Runs a fallible mutation under the session lock, mirroring to
    /// storage only when it succeeds.
    pub(crate) async fn try_apply<R>(
        &self,
        mutate: impl FnOnce(&mut Session) -> Result<R>,
    ) -> Result<R> {
        let mut session = self.session.lock().await;
        let out = mutate(&mut session)?;
        self.mirror(&session);
        Ok(out)
    }

    /// Runs a mutation under the session lock unless the session has been
    /// superseded, in which case the mutation is dropped.
    ///
    /// The generation is re-checked inside the lock so a stale pipeline
    /// cannot mirror over a newer session's state.
    pub(crate) async fn apply_if_current<R>(
        &self,
        mutate: impl FnOnce(&mut Session) -> R,
    ) -> Option<R> {
        let mut session = self.session.lock().await;
        if !self.is_current() {
            return None;
        }
        let out = mutate(&mut session);
        self.mirror(&session);
        Some(out)
    }

    /// Mirrors the current state without mutating it.
    pub(crate) async fn mirror_now(&self) {
        let session = self.session.lock().await;
        self.mirror(&session);
    }

    fn mirror(&self, session: &Session) {
        self.store
            .mirror(&session.params, &session.document, &session.share_id);
    }
}
