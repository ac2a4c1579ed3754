//! The full itinerary report.

use std::fmt;

use super::collections::{AdvisoryList, LocationList};
use super::datetime::DateRange;
use crate::models::FacetSlot;
use crate::session::Session;

/// Affordance shown for a section whose fetch is still in flight.
const LOADING: &str = "Still loading...";
/// Affordance shown for a section whose fetch failed.
const UNAVAILABLE: &str = "Could not load this section. Regenerate the trip to retry.";

/// Renders a whole session as one markdown report.
///
/// Sections appear in a fixed order regardless of what has settled. A
/// section that is still in flight or that failed says so instead of
/// vanishing, so a report captured mid-assembly is honest about its gaps.
pub struct ItineraryReport<'a> {
    session: &'a Session,
}

impl<'a> ItineraryReport<'a> {
    /// Wraps a session for rendering.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn facet_section<T: fmt::Display>(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        slot: &FacetSlot<T>,
    ) -> fmt::Result {
        writeln!(f, "## {title}")?;
        writeln!(f)?;
        match slot {
            FacetSlot::Ready(value) => write!(f, "{value}")?,
            FacetSlot::Pending => writeln!(f, "{LOADING}")?,
            FacetSlot::Missing => writeln!(f, "{UNAVAILABLE}")?,
        }
        writeln!(f)
    }
}

impl fmt::Display for ItineraryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.session.params();
        let document = self.session.document();

        writeln!(f, "# {}", document.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Destination: {} (from {})",
            params.destination, params.departure_city
        )?;
        writeln!(
            f,
            "- Dates: {}",
            DateRange {
                start: &params.start_date,
                end: &params.end_date,
            }
        )?;
        writeln!(
            f,
            "- Travellers: {} ({})",
            params.travellers, params.travel_style
        )?;
        writeln!(
            f,
            "- Estimated cost: {:.2} {}",
            document.total_estimated_cost, document.currency
        )?;
        writeln!(f)?;
        write!(f, "{}", document.summary)?;
        writeln!(f)?;

        writeln!(f, "## Budget")?;
        writeln!(f)?;
        let breakdown = &document.cost_breakdown;
        writeln!(f, "- Stay: ${:.2}", breakdown.stay)?;
        writeln!(f, "- Travel: ${:.2}", breakdown.travel)?;
        writeln!(f, "- Food: ${:.2}", breakdown.food)?;
        writeln!(f, "- Activities: ${:.2}", breakdown.activities)?;
        writeln!(f, "- Miscellaneous: ${:.2}", breakdown.miscellaneous)?;
        writeln!(f)?;

        writeln!(f, "## Schedule")?;
        writeln!(f)?;
        if document.schedule.is_empty() {
            writeln!(f, "No days in this itinerary.")?;
            writeln!(f)?;
        } else {
            for day in &document.schedule {
                write!(f, "{day}")?;
            }
        }

        Self::facet_section(f, "Accommodation", &document.accommodation)?;
        Self::facet_section(f, "Transportation", &document.transportation)?;
        Self::facet_section(f, "Food & Dining", &document.food)?;
        Self::facet_section(f, "Weather", &document.weather)?;

        writeln!(f, "## Travel Advisories")?;
        writeln!(f)?;
        match self.session.advisories() {
            FacetSlot::Ready(advisories) => write!(f, "{}", AdvisoryList(advisories))?,
            FacetSlot::Pending => writeln!(f, "{LOADING}")?,
            FacetSlot::Missing => writeln!(f, "{UNAVAILABLE}")?,
        }
        writeln!(f)?;

        writeln!(f, "## Map Points")?;
        writeln!(f)?;
        match self.session.locations() {
            FacetSlot::Ready(locations) => write!(f, "{}", LocationList(locations))?,
            FacetSlot::Pending => writeln!(f, "{LOADING}")?,
            FacetSlot::Missing => writeln!(f, "{UNAVAILABLE}")?,
        }

        Ok(())
    }
}
