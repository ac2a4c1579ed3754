//! Progressive itinerary assembly.
//!
//! Planning blocks on a single core fetch that produces the day-by-day
//! skeleton. The remaining sections (facets) are fetched one at a time in a
//! fixed order on a background task, each preceded by a pacing pause, and
//! applied to the session as they settle. A facet that fails is marked
//! unavailable and the pipeline moves on; it never aborts the trip.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::sleep;

use super::images::refresh_day_images;
use super::sharing::mint_share_token;
use super::TripPlanner;
use crate::error::Result;
use crate::generator::{GeneratorError, GeneratorResult, ItineraryGenerator};
use crate::models::{CoreItinerary, DayPlan, FacetSlot};
use crate::params::TripParameters;
use crate::session::{FacetUpdate, Session, SessionHandle};

/// The fixed order facets are fetched in.
const FACET_SEQUENCE: [Facet; 6] = [
    Facet::Accommodation,
    Facet::Transportation,
    Facet::Food,
    Facet::Weather,
    Facet::Advisories,
    Facet::Locations,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facet {
    Accommodation,
    Transportation,
    Food,
    Weather,
    Advisories,
    Locations,
}

impl Facet {
    fn as_str(self) -> &'static str {
        match self {
            Facet::Accommodation => "accommodation",
            Facet::Transportation => "transportation",
            Facet::Food => "food",
            Facet::Weather => "weather",
            Facet::Advisories => "advisories",
            Facet::Locations => "locations",
        }
    }
}

impl TripPlanner {
    /// Plans a new trip.
    ///
    /// Blocks only for the core fetch. On success the returned session
    /// already holds the complete schedule skeleton; facets and day images
    /// settle in the background, paced and in a fixed order. Call
    /// [`SessionHandle::enriched`] to wait for the background work.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::InvalidInput` if the parameters fail
    /// validation, and `WayfarerError::Generation` if the core fetch fails
    /// or produces a schedule that does not match the requested dates. No
    /// session is installed in either case.
    pub async fn plan_trip(&self, params: &TripParameters) -> Result<SessionHandle> {
        params.validate()?;

        let core = self.generator.core_itinerary(params).await?;
        validate_core(&core, params)?;

        let session = Session::started(params.clone(), core.into_document(), mint_share_token());
        let (handle, done) = self.install_session(session);
        handle.mirror_now().await;

        let generator = Arc::clone(&self.generator);
        let pacing = self.pacing;
        let task = handle.clone();
        tokio::spawn(async move {
            run_facet_stages(generator.as_ref(), &task, pacing.facet_delay).await;
            refresh_day_images(generator.as_ref(), &task, pacing.image_delay).await;
            let _ = done.send(true);
        });

        Ok(handle)
    }
}

/// Rejects core results whose schedule does not cover the requested dates
/// with days numbered 1..=n in order.
pub(super) fn validate_core(core: &CoreItinerary, params: &TripParameters) -> Result<()> {
    let expected = params.duration_days() as usize;
    if core.schedule.len() != expected {
        return Err(GeneratorError::malformed(
            "core itinerary",
            format!("Expected {expected} days, got {}", core.schedule.len()),
        )
        .into());
    }
    for (index, day) in core.schedule.iter().enumerate() {
        if day.day as usize != index + 1 {
            return Err(GeneratorError::malformed(
                "core itinerary",
                format!(
                    "Day numbers must run 1..={expected}; found {} at position {index}",
                    day.day
                ),
            )
            .into());
        }
    }
    Ok(())
}

/// Fetches every facet in order, pausing before each one and applying the
/// settled result to the session. Stands down as soon as the session is
/// superseded.
pub(super) async fn run_facet_stages(
    generator: &dyn ItineraryGenerator,
    handle: &SessionHandle,
    delay: Duration,
) {
    // Inputs are captured once. Facet fetches depend on parameters and day
    // titles, neither of which the edit operations can change.
    let snapshot = handle.snapshot().await;
    let params = snapshot.params().clone();
    let schedule = snapshot.document().schedule.clone();

    for facet in FACET_SEQUENCE {
        sleep(delay).await;
        if !handle.is_current() {
            debug!("{} fetch skipped, session superseded", facet.as_str());
            return;
        }
        let update = fetch_facet(generator, facet, &params, &schedule).await;
        if handle
            .apply_if_current(|session| session.apply_facet(update))
            .await
            .is_none()
        {
            debug!("{} result dropped, session superseded", facet.as_str());
            return;
        }
    }
}

async fn fetch_facet(
    generator: &dyn ItineraryGenerator,
    facet: Facet,
    params: &TripParameters,
    schedule: &[DayPlan],
) -> FacetUpdate {
    match facet {
        Facet::Accommodation => {
            FacetUpdate::Accommodation(settle(facet, generator.accommodation(params).await))
        }
        Facet::Transportation => {
            FacetUpdate::Transportation(settle(facet, generator.transportation(params).await))
        }
        Facet::Food => FacetUpdate::Food(settle(facet, generator.food(params).await)),
        Facet::Weather => FacetUpdate::Weather(settle(
            facet,
            generator
                .weather(&params.destination, params.start_date, params.end_date)
                .await,
        )),
        Facet::Advisories => FacetUpdate::Advisories(settle_list(
            facet,
            generator
                .advisories(&params.destination, params.start_date, params.end_date)
                .await,
        )),
        Facet::Locations => FacetUpdate::Locations(settle_list(
            facet,
            generator.locations(schedule, &params.destination).await,
        )),
    }
}

/// Document facets settle to unavailable on failure so the section can say
/// so instead of loading forever.
fn settle<T>(facet: Facet, outcome: GeneratorResult<T>) -> FacetSlot<T> {
    match outcome {
        Ok(value) => {
            debug!("{} facet settled", facet.as_str());
            FacetSlot::Ready(value)
        }
        Err(err) => {
            warn!("{} facet failed: {err}", facet.as_str());
            FacetSlot::Missing
        }
    }
}

/// List-shaped extras settle to an empty list on failure; consumers treat
/// "none found" and "lookup failed" the same way.
fn settle_list<T>(facet: Facet, outcome: GeneratorResult<Vec<T>>) -> FacetSlot<Vec<T>> {
    match outcome {
        Ok(value) => {
            debug!("{} facet settled", facet.as_str());
            FacetSlot::Ready(value)
        }
        Err(err) => {
            warn!("{} facet failed: {err}", facet.as_str());
            FacetSlot::Ready(Vec::new())
        }
    }
}
