//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of edit,
//! share, and save operations with consistent messaging and resource
//! display.

use std::fmt;

use crate::models::{Activity, DayPlan};
use crate::planner::ShareLink;
use crate::store::SavedTrip;

/// Wrapper type for displaying the result of itinerary edits.
///
/// This provides consistent formatting for edit results, including a
/// confirmation line and the resource as it looks after the change.
///
/// The wrapper can track and display specific changes made during the edit,
/// providing users with clear feedback about what was modified.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{
///     display::EditResult,
///     models::{Activity, ActivityKind, Priority},
/// };
///
/// let activity = Activity {
///     time: "09:00".to_string(),
///     description: "Breakfast at the shack".to_string(),
///     kind: ActivityKind::Food,
///     estimated_cost: 12.0,
///     priority: Priority::High,
///     travel_details: None,
///     selected_flight: None,
/// };
///
/// let result = EditResult::with_changes(
///     activity,
///     vec!["Priority set to High".to_string()],
/// );
/// println!("{}", result);
/// ```
pub struct EditResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> EditResult<T> {
    /// Create a new EditResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an EditResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn write_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for EditResult<DayPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated day {}.", self.resource.day)?;
        self.write_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for EditResult<Activity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated activity '{}'.", self.resource.description)?;
        self.write_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a freshly minted share link.
pub struct ShareResult {
    pub link: ShareLink,
}

impl ShareResult {
    /// Create a new ShareResult wrapper.
    pub fn new(link: ShareLink) -> Self {
        Self { link }
    }
}

impl fmt::Display for ShareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shared! Anyone with this link can open the trip.")?;
        writeln!(f)?;
        writeln!(f, "Link: {}", self.link.url)?;
        writeln!(f, "Token: {}", self.link.token)
    }
}

/// Wrapper type for displaying the result of saving a trip to the library.
pub struct SaveResult {
    pub entry: SavedTrip,
}

impl SaveResult {
    /// Create a new SaveResult wrapper.
    pub fn new(entry: SavedTrip) -> Self {
        Self { entry }
    }
}

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved '{}' ({}) to your trip library.",
            self.entry.name, self.entry.itinerary.title
        )
    }
}
