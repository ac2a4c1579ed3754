//! Itinerary document model and the core section it grows from.

use serde::{Deserialize, Serialize};

use super::{
    AccommodationOptions, DayPlan, FacetSlot, FoodGuide, TransportationGuide, WeatherReport,
};

/// The canonical in-memory representation of one trip's plan.
///
/// The required core section (title, costs, summary, schedule) is populated
/// atomically by the core generation fetch. The four optional facets load
/// independently afterwards, each tracked by its own [`FacetSlot`].
///
/// Durable snapshots of the document carry only settled facet data: unsettled
/// slots and day images are excluded by the serde layout itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryDocument {
    /// Title of the trip
    pub title: String,

    /// Total estimated cost for the whole trip
    pub total_estimated_cost: f64,

    /// ISO currency code the costs are quoted in
    pub currency: String,

    /// Narrative summary of the trip
    pub summary: TripSummary,

    /// Cost split across the five budget buckets; sums to the total
    pub cost_breakdown: CostBreakdown,

    /// Day-by-day schedule, one entry per trip day
    pub schedule: Vec<DayPlan>,

    /// Hotel recommendations in three budget tiers
    #[serde(default, skip_serializing_if = "FacetSlot::is_not_ready")]
    pub accommodation: FacetSlot<AccommodationOptions>,

    /// Long-distance and local transportation guidance
    #[serde(default, skip_serializing_if = "FacetSlot::is_not_ready")]
    pub transportation: FacetSlot<TransportationGuide>,

    /// Restaurant and food guidance
    #[serde(default, skip_serializing_if = "FacetSlot::is_not_ready")]
    pub food: FacetSlot<FoodGuide>,

    /// Per-day weather outlook
    #[serde(default, skip_serializing_if = "FacetSlot::is_not_ready")]
    pub weather: FacetSlot<WeatherReport>,
}

impl ItineraryDocument {
    /// Mutable access to one day of the schedule by day number.
    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayPlan> {
        self.schedule.iter_mut().find(|d| d.day == day)
    }

    /// True once all four facet slots have settled.
    pub fn facets_settled(&self) -> bool {
        self.accommodation.is_settled()
            && self.transportation.is_settled()
            && self.food.is_settled()
            && self.weather.is_settled()
    }
}

/// Narrative summary attached to the core section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    /// A paragraph describing the trip
    pub description: String,

    /// Short highlight phrases
    pub highlights: Vec<String>,
}

/// Cost split across five named buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub stay: f64,
    pub travel: f64,
    pub food: f64,
    pub activities: f64,
    pub miscellaneous: f64,
}

impl CostBreakdown {
    /// Sum of all five buckets.
    pub fn total(&self) -> f64 {
        self.stay + self.travel + self.food + self.activities + self.miscellaneous
    }
}

/// Output of the mandatory core generation fetch.
///
/// Everything here lands in the document unchanged; the document adds the
/// facet slots on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreItinerary {
    /// Title of the trip
    pub title: String,

    /// Total estimated cost for the whole trip
    pub total_estimated_cost: f64,

    /// ISO currency code the costs are quoted in
    pub currency: String,

    /// Narrative summary of the trip
    pub summary: TripSummary,

    /// Cost split across the five budget buckets
    pub cost_breakdown: CostBreakdown,

    /// Day-by-day schedule
    pub schedule: Vec<DayPlan>,
}

impl CoreItinerary {
    /// Builds the document skeleton: core data plus every facet and every
    /// day image marked as in flight.
    pub fn into_document(self) -> ItineraryDocument {
        ItineraryDocument {
            title: self.title,
            total_estimated_cost: self.total_estimated_cost,
            currency: self.currency,
            summary: self.summary,
            cost_breakdown: self.cost_breakdown,
            schedule: self
                .schedule
                .into_iter()
                .map(|day| DayPlan {
                    image: FacetSlot::Pending,
                    ..day
                })
                .collect(),
            accommodation: FacetSlot::Pending,
            transportation: FacetSlot::Pending,
            food: FacetSlot::Pending,
            weather: FacetSlot::Pending,
        }
    }
}
