//! Day-by-day schedule models: day plans, activities, and their enums.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FacetSlot;

/// One day of the generated schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Day number, 1-based and contiguous across the schedule
    pub day: u32,

    /// Short theme for the day
    pub title: String,

    /// Ordered activities for the day
    pub activities: Vec<Activity>,

    /// Freeform tip for the day
    pub tip: String,

    /// Illustrative image for the day. Session-local and regenerable;
    /// never written to durable storage.
    #[serde(skip)]
    pub image: FacetSlot<ImageRef>,
}

/// A single scheduled activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Time label, e.g. "09:00" or "Afternoon"
    pub time: String,

    /// What the traveller does
    pub description: String,

    /// Category of the activity
    pub kind: ActivityKind,

    /// Estimated cost for all travellers, in the itinerary currency
    pub estimated_cost: f64,

    /// User-settable priority; records written before the field existed
    /// observe Medium on first load
    #[serde(default)]
    pub priority: Priority,

    /// Distance and duration detail for travel activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_details: Option<TravelDetails>,

    /// Flight chosen for this activity, when the user has picked one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_flight: Option<FlightSelection>,
}

/// Category of a scheduled activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    /// A meal or food experience
    Food,

    /// Visiting a sight or landmark
    Sightseeing,

    /// A general activity (tour, class, excursion)
    Activity,

    /// Getting from one place to another
    Travel,

    /// Checking in or out of lodging
    Accommodation,
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(ActivityKind::Food),
            "sightseeing" => Ok(ActivityKind::Sightseeing),
            "activity" => Ok(ActivityKind::Activity),
            "travel" => Ok(ActivityKind::Travel),
            "accommodation" => Ok(ActivityKind::Accommodation),
            _ => Err(format!("Invalid activity kind: {s}")),
        }
    }
}

impl ActivityKind {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Food => "Food",
            ActivityKind::Sightseeing => "Sightseeing",
            ActivityKind::Activity => "Activity",
            ActivityKind::Travel => "Travel",
            ActivityKind::Accommodation => "Accommodation",
        }
    }
}

/// User-assigned priority of an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Priority {
    /// Must-do
    High,

    /// Default weighting
    #[default]
    Medium,

    /// Skippable if time runs short
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Distance and duration detail attached to travel activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelDetails {
    /// Human-readable distance, e.g. "450 km"
    pub distance: String,

    /// Human-readable duration, e.g. "1h 20m"
    pub duration: String,
}

/// Flight picked by the user for a travel activity.
///
/// Selection is a typed field update: picking a flight records it here and
/// reprices the activity, leaving the activity description untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightSelection {
    /// Operating airline
    pub airline: String,

    /// Departure time label
    pub departure_time: String,

    /// Arrival time label
    pub arrival_time: String,
}

/// Opaque reference to a generated day image (e.g. a data URI).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wraps a raw image reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Borrows the raw reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
