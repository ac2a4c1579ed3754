//! Date display utilities.
//!
//! This module provides a wrapper type for formatting a trip's date window
//! in a consistent, human-readable format.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a trip's date window that provides consistent formatting
/// via the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD to YYYY-MM-DD (N days)`
/// - Dates print in ISO form
/// - The day count is inclusive of both endpoints, matching how itineraries
///   number their days
/// - A single-day window prints as just `YYYY-MM-DD (1 day)`
pub struct DateRange<'a> {
    pub start: &'a Date,
    pub end: &'a Date,
}

impl fmt::Display for DateRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = (*self.end - *self.start).get_days() + 1;
        if days == 1 {
            write!(f, "{} (1 day)", self.start)
        } else {
            write!(f, "{} to {} ({days} days)", self.start, self.end)
        }
    }
}
