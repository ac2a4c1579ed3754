//! Activity-level edits of the live document.
//!
//! Edits run under the session lock and are mirrored to storage when they
//! succeed. They are deliberately independent of the enrichment pipeline:
//! an itinerary can be rearranged while its facets are still settling.

use super::TripPlanner;
use crate::error::Result;
use crate::models::{Activity, DayPlan};
use crate::params::{ReorderActivity, SelectFlight, SetPriority};
use crate::session::SessionHandle;

impl TripPlanner {
    /// Moves an activity to a new position within its day and returns the
    /// updated day.
    pub async fn reorder_activity(
        &self,
        trip: &SessionHandle,
        params: &ReorderActivity,
    ) -> Result<DayPlan> {
        trip.try_apply(|session| session.reorder_activity(params))
            .await
    }

    /// Sets the priority of one activity and returns the updated activity.
    pub async fn set_priority(
        &self,
        trip: &SessionHandle,
        params: &SetPriority,
    ) -> Result<Activity> {
        trip.try_apply(|session| session.set_priority(params)).await
    }

    /// Pins a chosen flight on a travel activity, repricing it for the
    /// whole party, and returns the updated activity.
    pub async fn select_flight(
        &self,
        trip: &SessionHandle,
        params: &SelectFlight,
    ) -> Result<Activity> {
        trip.try_apply(|session| session.select_flight(params))
            .await
    }
}
