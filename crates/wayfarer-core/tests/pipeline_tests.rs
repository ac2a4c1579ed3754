//! End-to-end tests of the progressive assembly pipeline.
//!
//! These run under tokio's paused clock, so the pacing pauses between
//! background fetches elapse instantly while staying exact: a fetch
//! scripted to happen 7.2 virtual seconds in really is recorded at 7.2
//! seconds, and the assertions can demand exact offsets.

mod common;

use std::time::Duration;

use common::{planner_over, planner_with, three_day_params, ScriptedGenerator};
use jiff::civil::date;
use tokio::time::Instant;
use wayfarer_core::params::{TravelStyle, TripParameters};
use wayfarer_core::store::{keys, KvStore};
use wayfarer_core::WayfarerError;

const FACET_DELAY: Duration = Duration::from_millis(1200);
const IMAGE_DELAY: Duration = Duration::from_millis(1500);

fn jaipur_params() -> TripParameters {
    TripParameters {
        destination: "Jaipur".to_string(),
        departure_city: "Delhi".to_string(),
        start_date: date(2026, 4, 1),
        end_date: date(2026, 4, 2),
        travellers: 1,
        travel_style: TravelStyle::Economy,
        budget: None,
        interests: vec!["culture".to_string()],
    }
}

#[tokio::test(start_paused = true)]
async fn test_plan_returns_with_only_the_core_fetched() {
    let (planner, _store, log) = planner_with(ScriptedGenerator::new(), FACET_DELAY, IMAGE_DELAY).await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");

    // the clock has not advanced, so nothing beyond the core fetch ran
    assert_eq!(log.names(), ["core"]);

    let document = trip.document().await;
    assert_eq!(document.schedule.len(), 3);
    assert!(document.accommodation.is_pending());
    assert!(document.transportation.is_pending());
    assert!(document.food.is_pending());
    assert!(document.weather.is_pending());
    assert!(document.schedule.iter().all(|d| d.image.is_pending()));
}

#[tokio::test(start_paused = true)]
async fn test_facets_and_images_settle_in_order_with_pacing() {
    let (planner, _store, log) = planner_with(ScriptedGenerator::new(), FACET_DELAY, IMAGE_DELAY).await;

    let start = Instant::now();
    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;

    let events = log.events();
    let names: Vec<&str> = events.iter().map(|(what, _)| what.as_str()).collect();
    assert_eq!(
        names,
        [
            "core",
            "accommodation",
            "transportation",
            "food",
            "weather",
            "advisories",
            "locations",
            "image",
            "image",
            "image",
        ]
    );

    let offsets: Vec<Duration> = events.iter().map(|(_, at)| *at - start).collect();

    // the blocking core fetch happens immediately
    assert_eq!(offsets[0], Duration::ZERO);

    // each facet fetch is preceded by its own pacing pause
    for (i, offset) in offsets[1..7].iter().enumerate() {
        assert_eq!(*offset, FACET_DELAY * (i as u32 + 1));
    }

    // images start right after the last facet; the pause sits between
    // consecutive days, not before the first
    assert_eq!(offsets[7], FACET_DELAY * 6);
    assert_eq!(offsets[8], FACET_DELAY * 6 + IMAGE_DELAY);
    assert_eq!(offsets[9], FACET_DELAY * 6 + IMAGE_DELAY * 2);
}

#[tokio::test]
async fn test_failed_facet_is_isolated() {
    let generator = ScriptedGenerator::new().failing(&["transportation"]);
    let (planner, _store, log) = planner_with(generator, Duration::ZERO, Duration::ZERO).await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;

    let document = trip.document().await;
    assert!(document.transportation.is_missing());

    // everything behind the failed facet still ran and settled
    assert!(document.accommodation.is_ready());
    assert!(document.food.is_ready());
    assert!(document.weather.is_ready());
    assert!(trip.advisories().await.is_ready());
    assert!(trip.locations().await.is_ready());
    assert!(log.names().contains(&"locations".to_string()));
}

#[tokio::test]
async fn test_failed_extras_settle_as_empty_lists() {
    let generator = ScriptedGenerator::new().failing(&["advisories", "locations"]);
    let (planner, _store, _log) = planner_with(generator, Duration::ZERO, Duration::ZERO).await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;

    // a failed lookup reads the same as "none found"
    let advisories = trip.advisories().await;
    assert!(advisories.as_ready().expect("settled").is_empty());
    let locations = trip.locations().await;
    assert!(locations.as_ready().expect("settled").is_empty());
}

#[tokio::test]
async fn test_failed_core_fetch_leaves_no_trace() {
    let generator = ScriptedGenerator::new().failing(&["core"]);
    let (planner, store, log) = planner_with(generator, Duration::ZERO, Duration::ZERO).await;

    let err = planner.plan_trip(&three_day_params()).await.unwrap_err();
    assert!(matches!(err, WayfarerError::Generation { .. }));

    // no session was installed, no pipeline spawned, nothing mirrored
    assert_eq!(log.names(), ["core"]);
    assert!(planner.resume_last().await.expect("resume").is_none());
    assert_eq!(store.get(keys::LAST_TRIP_DETAILS).expect("read"), None);
    assert_eq!(store.get(keys::LAST_ITINERARY).expect("read"), None);
}

#[tokio::test]
async fn test_failed_day_image_keeps_the_loop_going() {
    // day 1 of a three-day trip is titled "Arrival in {destination}"
    let generator = ScriptedGenerator::new().failing_image_containing("Arrival");
    let (planner, _store, _log) = planner_with(generator, Duration::ZERO, Duration::ZERO).await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;

    let document = trip.document().await;
    assert!(document.schedule[0].image.is_missing());
    assert!(document.schedule[1].image.is_ready());
    assert!(document.schedule[2].image.is_ready());
}

#[tokio::test(start_paused = true)]
async fn test_replanning_supersedes_the_running_pipeline() {
    let (planner, _store, log) = planner_with(ScriptedGenerator::new(), FACET_DELAY, IMAGE_DELAY).await;

    let first = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");

    // let exactly two facets settle, then plan something else
    tokio::time::sleep(FACET_DELAY * 2 + Duration::from_millis(50)).await;
    let second = planner
        .plan_trip(&jaipur_params())
        .await
        .expect("Failed to plan second trip");

    assert!(!first.is_current());
    assert!(second.is_current());

    // enrichment resolves for both: the superseded pipeline stands down
    first.enriched().await;
    second.enriched().await;

    // the first trip stopped where it was superseded
    let first_doc = first.document().await;
    assert!(first_doc.accommodation.is_ready());
    assert!(first_doc.transportation.is_ready());
    assert!(first_doc.food.is_pending());
    assert!(first_doc.schedule.iter().all(|d| !d.image.is_ready()));

    // the second settled completely
    let second_doc = second.document().await;
    assert!(second_doc.facets_settled());
    assert!(second_doc.schedule.iter().all(|d| d.image.is_ready()));

    // food was only ever fetched for the second trip
    let food_fetches = log.names().iter().filter(|w| w.as_str() == "food").count();
    assert_eq!(food_fetches, 1);
}

#[tokio::test(start_paused = true)]
async fn test_clear_active_stands_down_the_pipeline() {
    let (planner, _store, log) = planner_with(ScriptedGenerator::new(), FACET_DELAY, IMAGE_DELAY).await;

    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");

    tokio::time::sleep(FACET_DELAY + Duration::from_millis(50)).await;
    planner.clear_active();

    assert!(!trip.is_current());
    // the wait still resolves; standing down counts as finished
    trip.enriched().await;

    assert_eq!(log.names(), ["core", "accommodation"]);
    assert!(planner.resume_last().await.expect("resume").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_resume_refreshes_images_without_refetching_facets() {
    let (planner, store, _log) = planner_with(ScriptedGenerator::new(), FACET_DELAY, IMAGE_DELAY).await;
    let trip = planner
        .plan_trip(&three_day_params())
        .await
        .expect("Failed to plan trip");
    trip.enriched().await;
    drop(planner);

    // a new planner over the same store, as after a restart
    let generator = ScriptedGenerator::new();
    let resumed_log = generator.log();
    let planner = planner_over(store, generator, FACET_DELAY, IMAGE_DELAY).await;

    let resumed = planner
        .resume_last()
        .await
        .expect("Failed to resume")
        .expect("A trip should be stored");
    resumed.enriched().await;

    // facets came back from storage; only images were fetched again
    assert_eq!(resumed_log.names(), ["image", "image", "image"]);

    let document = resumed.document().await;
    assert!(document.facets_settled());
    assert!(document.schedule.iter().all(|d| d.image.is_ready()));

    // session extras never persist, so they come back unavailable
    assert!(resumed.advisories().await.is_missing());
    assert!(resumed.locations().await.is_missing());
}
