//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use super::datetime::DateRange;
use crate::models::{LocationPoint, TravelAdvisory};
use crate::store::SavedTrip;

/// Newtype wrapper for displaying the trip library.
///
/// Entries are numbered from 1 so the list lines up with the positions
/// that `load` and the other library operations accept. Handles empty
/// collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use wayfarer_core::{
///     display::SavedTripList,
///     models::{CoreItinerary, CostBreakdown, TripSummary},
///     params::{TravelStyle, TripParameters},
///     store::SavedTrip,
/// };
///
/// let entry = SavedTrip {
///     name: "Goa 2026".to_string(),
///     details: TripParameters {
///         destination: "Goa".to_string(),
///         departure_city: "Mumbai".to_string(),
///         start_date: date(2026, 3, 3),
///         end_date: date(2026, 3, 5),
///         travellers: 2,
///         travel_style: TravelStyle::Standard,
///         budget: Some(1500.0),
///         interests: vec![],
///     },
///     itinerary: CoreItinerary {
///         title: "Goa in 3 Days".to_string(),
///         total_estimated_cost: 840.0,
///         currency: "USD".to_string(),
///         summary: TripSummary {
///             description: "Sun and sand.".to_string(),
///             highlights: vec![],
///         },
///         cost_breakdown: CostBreakdown::default(),
///         schedule: vec![],
///     }
///     .into_document(),
/// };
///
/// let trips = SavedTripList(vec![entry]);
/// let output = format!("{}", trips);
/// assert!(output.contains("1. Goa 2026: Goa in 3 Days"));
/// ```
pub struct SavedTripList(pub Vec<SavedTrip>);

impl SavedTripList {
    /// Check if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of saved trips in the library.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the saved trip at the given index.
    pub fn get(&self, index: usize) -> Option<&SavedTrip> {
        self.0.get(index)
    }

    /// Get an iterator over the saved trips.
    pub fn iter(&self) -> std::slice::Iter<'_, SavedTrip> {
        self.0.iter()
    }
}

impl Index<usize> for SavedTripList {
    type Output = SavedTrip;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for SavedTripList {
    type Item = SavedTrip;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SavedTripList {
    type Item = &'a SavedTrip;
    type IntoIter = std::slice::Iter<'a, SavedTrip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SavedTripList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No saved trips.")
        } else {
            for (index, entry) in self.0.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {}: {}, {}",
                    index + 1,
                    entry.name,
                    entry.itinerary.title,
                    DateRange {
                        start: &entry.details.start_date,
                        end: &entry.details.end_date,
                    }
                )?;
            }
            Ok(())
        }
    }
}

/// Borrowed wrapper for displaying a list of travel advisories.
pub struct AdvisoryList<'a>(pub &'a [TravelAdvisory]);

impl fmt::Display for AdvisoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No advisories for this destination.")
        } else {
            for advisory in self.0 {
                write!(f, "{advisory}")?;
            }
            Ok(())
        }
    }
}

/// Borrowed wrapper for displaying the map points of a trip.
pub struct LocationList<'a>(pub &'a [LocationPoint]);

impl fmt::Display for LocationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No map points for this trip.")
        } else {
            for location in self.0 {
                write!(f, "{location}")?;
            }
            Ok(())
        }
    }
}
