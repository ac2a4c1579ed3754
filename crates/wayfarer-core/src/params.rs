//! Parameter structures for Wayfarer operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, other frontends later) without
//! framework-specific derives or dependencies. These structures provide a
//! clean interface for passing data between different layers of the
//! application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers create wrapper structs that add their own derives and
//! convert into these core types via `From` impls or builder methods; the
//! planner only ever sees the core types. Parameters validate themselves
//! (`validate()`) so every interface gets the same rules and the same
//! field-tagged [`InvalidInput`](crate::WayfarerError::InvalidInput) errors.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfarerError};
use crate::models::Priority;

/// Parameters for planning a new trip.
///
/// This is the user's side of the contract: everything the generator needs
/// to produce a core itinerary and its facets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripParameters {
    /// Where the trip goes (required)
    pub destination: String,
    /// Where the traveller starts from (required)
    pub departure_city: String,
    /// First day of the trip
    pub start_date: Date,
    /// Last day of the trip, inclusive
    pub end_date: Date,
    /// Number of people travelling
    pub travellers: u32,
    /// Spending posture the generator should plan around
    #[serde(default)]
    pub travel_style: TravelStyle,
    /// Optional overall budget cap, in the generator's currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// What the traveller cares about, e.g. "beaches", "food"
    pub interests: Vec<String>,
}

impl TripParameters {
    /// Validate trip parameters before they reach the generator.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - When a field is empty, the date
    ///   range is inverted, the traveller count is zero, or the budget is
    ///   not a positive number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use wayfarer_core::params::{TravelStyle, TripParameters};
    ///
    /// let params = TripParameters {
    ///     destination: "Goa".to_string(),
    ///     departure_city: "Mumbai".to_string(),
    ///     start_date: date(2026, 3, 3),
    ///     end_date: date(2026, 3, 5),
    ///     travellers: 2,
    ///     travel_style: TravelStyle::Standard,
    ///     budget: None,
    ///     interests: vec!["beaches".to_string()],
    /// };
    /// assert!(params.validate().is_ok());
    /// assert_eq!(params.duration_days(), 3);
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(WayfarerError::invalid_input("destination")
                .with_reason("Destination must not be empty"));
        }
        if self.departure_city.trim().is_empty() {
            return Err(WayfarerError::invalid_input("departure_city")
                .with_reason("Departure city must not be empty"));
        }
        if self.end_date < self.start_date {
            return Err(WayfarerError::invalid_input("end_date").with_reason(format!(
                "End date {} precedes start date {}",
                self.end_date, self.start_date
            )));
        }
        if self.travellers == 0 {
            return Err(WayfarerError::invalid_input("travellers")
                .with_reason("At least one traveller is required"));
        }
        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(WayfarerError::invalid_input("budget")
                    .with_reason(format!("Budget must be a positive amount, got {budget}")));
            }
        }
        if !self.interests.iter().any(|i| !i.trim().is_empty()) {
            return Err(WayfarerError::invalid_input("interests")
                .with_reason("At least one interest is required"));
        }
        Ok(())
    }

    /// Trip length in days, counting both endpoints.
    ///
    /// Returns 0 when the date range is inverted; `validate` rejects that
    /// case before any planning happens.
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).get_days();
        if days < 0 {
            0
        } else {
            days as u32 + 1
        }
    }
}

/// Spending posture for a trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TravelStyle {
    /// Keep costs down
    Economy,

    /// Sensible mid-range choices
    #[default]
    Standard,

    /// Spend for comfort
    Luxury,
}

impl FromStr for TravelStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "economy" | "budget" => Ok(TravelStyle::Economy),
            "standard" => Ok(TravelStyle::Standard),
            "luxury" => Ok(TravelStyle::Luxury),
            _ => Err(format!("Invalid travel style: {s}")),
        }
    }
}

impl TravelStyle {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Economy => "Economy",
            TravelStyle::Standard => "Standard",
            TravelStyle::Luxury => "Luxury",
        }
    }
}

/// Defaults remembered between trips and offered to the next plan.
///
/// Every field is optional; a missing field means "no preference recorded"
/// and interfaces fall back to their own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TravellerPreferences {
    /// Preferred departure city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    /// Preferred spending posture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_style: Option<TravelStyle>,
    /// Standing interests to seed new trips with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl TravellerPreferences {
    /// True when no preference has been recorded at all.
    pub fn is_empty(&self) -> bool {
        self.departure_city.is_none() && self.travel_style.is_none() && self.interests.is_none()
    }
}

/// Which parts of a trip a share link exposes.
///
/// Deselected sections are still present in the shared document, replaced
/// by explicit placeholders or empty structures, so every consumer sees the
/// same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareSelection {
    /// Include the narrative summary
    pub summary: bool,
    /// Include the day-by-day schedule
    pub schedule: bool,
    /// When the schedule is included, restrict it to these day numbers.
    /// `None` shares every day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<u32>>,
    /// Include hotel recommendations
    pub accommodation: bool,
    /// Include transportation guidance
    pub transportation: bool,
    /// Include the food guide
    pub food: bool,
    /// Include the weather outlook
    pub weather: bool,
    /// Include costs and the budget breakdown
    pub budget: bool,
}

impl Default for ShareSelection {
    /// Everything shared, all days included.
    fn default() -> Self {
        Self {
            summary: true,
            schedule: true,
            days: None,
            accommodation: true,
            transportation: true,
            food: true,
            weather: true,
            budget: true,
        }
    }
}

impl ShareSelection {
    /// A selection with every section switched off, as a starting point for
    /// interfaces that enable sections one by one.
    pub fn none() -> Self {
        Self {
            summary: false,
            schedule: false,
            days: None,
            accommodation: false,
            transportation: false,
            food: false,
            weather: false,
            budget: false,
        }
    }
}

/// Parameters for moving an activity within a day's schedule.
///
/// Both endpoints name a day so that an attempted cross-day move is visible
/// and can be rejected; activities never change days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReorderActivity {
    /// Day the activity currently belongs to
    pub from_day: u32,
    /// Day the activity should end up in; must equal `from_day`
    pub to_day: u32,
    /// Current position within the day, 0-indexed
    pub from_index: usize,
    /// Target position within the day, 0-indexed
    pub to_index: usize,
}

impl ReorderActivity {
    /// Validate reorder parameters.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - When the move crosses days
    pub fn validate(&self) -> Result<()> {
        if self.from_day != self.to_day {
            return Err(WayfarerError::invalid_input("to_day").with_reason(format!(
                "Activities can only be reordered within their own day (day {} to day {})",
                self.from_day, self.to_day
            )));
        }
        Ok(())
    }
}

/// Parameters for changing an activity's priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetPriority {
    /// Day the activity belongs to
    pub day: u32,
    /// Position of the activity within the day, 0-indexed
    pub activity: usize,
    /// New priority
    pub priority: Priority,
}

/// Parameters for recording a chosen flight on a travel activity.
///
/// Selecting a flight stores the choice as typed data and reprices the
/// activity to `price` multiplied by the trip's traveller count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectFlight {
    /// Day the activity belongs to
    pub day: u32,
    /// Position of the activity within the day, 0-indexed
    pub activity: usize,
    /// Operating airline
    pub airline: String,
    /// Departure time label, e.g. "06:40"
    pub departure_time: String,
    /// Arrival time label, e.g. "08:05"
    pub arrival_time: String,
    /// Fare per traveller
    pub price: f64,
}

impl SelectFlight {
    /// Validate flight selection parameters.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - When the airline is empty or the
    ///   price is not a non-negative number
    pub fn validate(&self) -> Result<()> {
        if self.airline.trim().is_empty() {
            return Err(
                WayfarerError::invalid_input("airline").with_reason("Airline must not be empty")
            );
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(WayfarerError::invalid_input("price").with_reason(format!(
                "Price must be a non-negative amount, got {}",
                self.price
            )));
        }
        Ok(())
    }
}
