//! Tests of what reaches durable storage, and in what shape.
//!
//! The mirror-after-every-change policy is easiest to observe from outside
//! the planner: these tests hold their own handle on the backing store and
//! inspect raw records while the planner works on top of it.

mod common;

use std::time::Duration;

use common::{planner_over, planner_with, three_day_params, ScriptedGenerator};
use wayfarer_core::params::{TravelStyle, TravellerPreferences};
use wayfarer_core::store::{keys, KvStore, MemoryStore};
use wayfarer_core::WayfarerError;

#[tokio::test]
async fn test_settled_trip_round_trips_through_a_restart() {
    let (planner, store, _log) =
        planner_with(ScriptedGenerator::new(), Duration::ZERO, Duration::ZERO).await;
    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;
    let original_params = trip.params().await;
    let original = trip.document().await;
    drop(planner);

    let planner = planner_over(
        store,
        ScriptedGenerator::new(),
        Duration::ZERO,
        Duration::ZERO,
    )
    .await;
    let resumed = planner
        .resume_last()
        .await
        .expect("Failed to resume")
        .expect("A trip should be stored");
    resumed.enriched().await;

    assert_eq!(resumed.params().await, original_params);
    // images are regenerated rather than loaded, but the generator is
    // deterministic, so the whole document matches
    assert_eq!(resumed.document().await, original);
}

#[tokio::test(start_paused = true)]
async fn test_unsettled_sections_never_reach_storage() {
    let (planner, store, _log) = planner_with(
        ScriptedGenerator::new(),
        Duration::from_millis(1200),
        Duration::from_millis(1500),
    )
    .await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");

    // mirrored immediately, before any facet settles
    let raw = store
        .get(keys::LAST_ITINERARY)
        .expect("read")
        .expect("mirrored document");
    assert!(raw.contains("\"title\""));
    assert!(raw.contains("\"schedule\""));
    assert!(!raw.contains("\"accommodation\""));
    assert!(!raw.contains("\"weather\""));

    trip.enriched().await;

    // settled facets are now part of the snapshot; day images still are not
    let raw = store
        .get(keys::LAST_ITINERARY)
        .expect("read")
        .expect("mirrored document");
    assert!(raw.contains("\"accommodation\""));
    assert!(raw.contains("\"weather\""));
    assert!(!raw.contains("sample:image"));
}

#[tokio::test]
async fn test_planning_survives_a_full_store() {
    // a quota far too small for even the parameters record
    let store = MemoryStore::with_quota(64);
    let planner = planner_over(
        store,
        ScriptedGenerator::new(),
        Duration::ZERO,
        Duration::ZERO,
    )
    .await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("planning must not fail on a full store");
    trip.enriched().await;

    // the live session is complete even though nothing could be mirrored
    let document = trip.document().await;
    assert_eq!(document.schedule.len(), 3);
    assert!(document.facets_settled());
    assert!(planner.resume_last().await.expect("resume").is_none());
}

#[tokio::test]
async fn test_share_surfaces_capacity_errors() {
    let store = MemoryStore::with_quota(64);
    let planner = planner_over(
        store,
        ScriptedGenerator::new(),
        Duration::ZERO,
        Duration::ZERO,
    )
    .await;
    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;

    // sharing is user-initiated, so unlike mirroring it reports the failure
    let err = planner
        .share(&trip, &wayfarer_core::params::ShareSelection::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WayfarerError::CapacityExceeded { .. }));

    // the live trip is unaffected
    assert!(trip.is_current());
    assert_eq!(trip.document().await.schedule.len(), 3);
}

#[tokio::test]
async fn test_corrupt_active_state_resumes_clean() {
    let (planner, store, _log) =
        planner_with(ScriptedGenerator::new(), Duration::ZERO, Duration::ZERO).await;
    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;

    store
        .put(keys::LAST_ITINERARY, "{definitely not json")
        .expect("write garbage");

    // the unreadable record is discarded, not reported as an error
    assert!(planner.resume_last().await.expect("resume").is_none());
    assert_eq!(store.get(keys::LAST_TRIP_DETAILS).expect("read"), None);
    assert_eq!(store.get(keys::LAST_ITINERARY).expect("read"), None);
}

#[tokio::test]
async fn test_saved_library_survives_a_restart() {
    let (planner, store, _log) =
        planner_with(ScriptedGenerator::new(), Duration::ZERO, Duration::ZERO).await;
    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;
    planner
        .save_trip(&trip, "Monsoon break")
        .await
        .expect("Failed to save trip");
    planner
        .save_trip(&trip, "Second look")
        .await
        .expect("Failed to save trip");
    drop(planner);

    let planner = planner_over(
        store,
        ScriptedGenerator::new(),
        Duration::ZERO,
        Duration::ZERO,
    )
    .await;

    let names: Vec<String> = planner
        .saved_trips()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Monsoon break", "Second look"]);

    let loaded = planner
        .load_saved(2)
        .await
        .expect("Failed to load saved trip");
    loaded.enriched().await;
    assert_eq!(loaded.params().await, three_day_params());
}

#[tokio::test]
async fn test_preferences_survive_a_restart() {
    let (planner, store, _log) =
        planner_with(ScriptedGenerator::new(), Duration::ZERO, Duration::ZERO).await;

    let prefs = TravellerPreferences {
        departure_city: Some("Mumbai".to_string()),
        travel_style: Some(TravelStyle::Luxury),
        interests: Some(vec!["food".to_string()]),
    };
    planner
        .save_preferences(&prefs)
        .expect("Failed to save preferences");
    drop(planner);

    let planner = planner_over(
        store,
        ScriptedGenerator::new(),
        Duration::ZERO,
        Duration::ZERO,
    )
    .await;
    assert_eq!(planner.preferences(), prefs);
}
