//! Integration tests comparing CLI and direct Display implementations
//!
//! The CLI renders reports through the same Display types the core exposes,
//! so output captured from the `wf` binary should match what a caller
//! holding the planner would format directly.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use jiff::civil::date;
use tempfile::TempDir;
use wayfarer_core::display::{ItineraryReport, SavedTripList};
use wayfarer_core::params::{ShareSelection, TravelStyle, TravellerPreferences, TripParameters};
use wayfarer_core::{TripPlanner, TripPlannerBuilder};

/// Helper function to create a planner on a store file, with pacing turned
/// off so seeding a trip does not take wall-clock time
async fn create_test_planner(store_path: &Path) -> TripPlanner {
    TripPlannerBuilder::new()
        .with_store_path(Some(store_path))
        .with_pacing(Duration::ZERO, Duration::ZERO)
        .build()
        .await
        .expect("Failed to create planner")
}

/// Parameters for a short two-day trip used across the tests
fn goa_params() -> TripParameters {
    TripParameters {
        destination: "Goa".to_string(),
        departure_city: "Mumbai".to_string(),
        start_date: date(2026, 3, 3),
        end_date: date(2026, 3, 4),
        travellers: 2,
        travel_style: TravelStyle::Standard,
        budget: None,
        interests: vec!["beaches".to_string()],
    }
}

/// Run a CLI command against a store file and capture its output
fn run_cli_command(store_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wf"));
    cmd.arg("--no-color").arg("--store-file").arg(store_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

/// Test that `wf show` prints exactly what a direct resume-and-render
/// through the core would produce
#[tokio::test]
async fn test_show_output_matches_report_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("test.db");

    // Seed an active trip through the core
    {
        let planner = create_test_planner(&store_path).await;
        let trip = planner
            .plan_trip(&goa_params())
            .await
            .expect("Failed to plan trip");
        trip.enriched().await;
    }

    let cli_output = run_cli_command(store_path.to_str().unwrap(), &["show"]);

    // Resume through the core exactly as the CLI does and render directly
    let planner = create_test_planner(&store_path).await;
    let trip = planner
        .resume_last()
        .await
        .expect("Failed to resume")
        .expect("No active trip stored");
    trip.enriched().await;
    let session = trip.snapshot().await;
    let direct_output = ItineraryReport::new(&session).to_string();

    // Both outputs come from the same Display impl over the same stored
    // trip; image refs are deterministic, so they match exactly
    assert_eq!(cli_output.trim(), direct_output.trim());
    assert!(cli_output.contains("# 2-Day Goa Escape"));
}

/// Test that `wf trips` prints the same listing as the core's display type
#[tokio::test]
async fn test_trips_output_matches_list_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("test.db");

    {
        let planner = create_test_planner(&store_path).await;
        let trip = planner
            .plan_trip(&goa_params())
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
    }

    let cli_output = run_cli_command(store_path.to_str().unwrap(), &["trips"]);

    let planner = create_test_planner(&store_path).await;
    let direct_output = format!("# Saved Trips\n\n{}", SavedTripList(planner.saved_trips()));

    assert_eq!(cli_output.trim(), direct_output.trim());
    assert!(cli_output.contains("1. Monsoon break: 2-Day Goa Escape"));
    assert!(cli_output.contains("2. Second look: 2-Day Goa Escape"));
}

/// Test that an opened share renders identically through the CLI and the
/// core, placeholders included
#[tokio::test]
async fn test_opened_share_matches_core_rendering() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("test.db");

    // Share only the schedule and budget
    let token = {
        let planner = create_test_planner(&store_path).await;
        let trip = planner
            .plan_trip(&goa_params())
            .await
            .expect("Failed to plan trip");
        trip.enriched().await;

        let mut selection = ShareSelection::none();
        selection.schedule = true;
        selection.budget = true;
        let link = planner
            .share(&trip, &selection)
            .await
            .expect("Failed to share trip");
        link.token
    };

    let cli_output = run_cli_command(store_path.to_str().unwrap(), &["open", &token]);

    let planner = create_test_planner(&store_path).await;
    let trip = planner
        .open_shared(&token)
        .await
        .expect("Failed to open shared trip");
    trip.enriched().await;
    let session = trip.snapshot().await;
    let direct_output = ItineraryReport::new(&session).to_string();

    assert_eq!(cli_output.trim(), direct_output.trim());
    // withheld sections are placeholders, not holes
    assert!(cli_output.contains("Not shared."));
    assert!(cli_output.contains("### Day 1"));
}

/// Test that preferences written by the CLI are what the core reads back,
/// and that both sides print them identically
#[tokio::test]
async fn test_preferences_round_trip_between_core_and_cli() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("test.db");
    let store_str = store_path.to_str().unwrap();

    let _set_output = run_cli_command(
        store_str,
        &["prefs", "set", "--from", "Pune", "--style", "economy"],
    );

    let planner = create_test_planner(&store_path).await;
    let prefs = planner.preferences();
    assert_eq!(prefs.departure_city.as_deref(), Some("Pune"));
    assert_eq!(prefs.travel_style, Some(TravelStyle::Economy));
    assert_eq!(prefs.interests, None);

    // Update through the core, then render through both paths
    planner
        .save_preferences(&TravellerPreferences {
            departure_city: Some("Pune".to_string()),
            travel_style: Some(TravelStyle::Luxury),
            interests: Some(vec!["food".to_string(), "art".to_string()]),
        })
        .expect("Failed to save preferences");

    let cli_output = run_cli_command(store_str, &["prefs", "show"]);
    let direct_output = format!("# Preferences\n\n{}", planner.preferences());

    assert_eq!(cli_output.trim(), direct_output.trim());
    assert!(cli_output.contains("- Travel style: Luxury"));
    assert!(cli_output.contains("- Interests: food, art"));
}

/// Test that clearing through the CLI leaves nothing for the core to resume
#[tokio::test]
async fn test_clear_via_cli_is_visible_to_core() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("test.db");

    {
        let planner = create_test_planner(&store_path).await;
        let trip = planner
            .plan_trip(&goa_params())
            .await
            .expect("Failed to plan trip");
        trip.enriched().await;
    }

    let _clear_output = run_cli_command(store_path.to_str().unwrap(), &["clear"]);

    let planner = create_test_planner(&store_path).await;
    let resumed = planner.resume_last().await.expect("Failed to resume");
    assert!(resumed.is_none());

    // the library and share records survive a clear, preferences too
    assert!(planner.saved_trips().is_empty());
}
