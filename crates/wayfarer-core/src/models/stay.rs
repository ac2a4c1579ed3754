//! Accommodation facet models.

use serde::{Deserialize, Serialize};

/// Hotel recommendations grouped into three budget tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccommodationOptions {
    /// Cheapest viable options
    pub budget: Vec<Hotel>,

    /// Mid-range options
    pub standard: Vec<Hotel>,

    /// Premium options
    pub luxury: Vec<Hotel>,
}

/// One recommended hotel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    /// Hotel name
    pub name: String,

    /// Street address
    pub address: String,

    /// Official star rating (1-5)
    pub star_rating: u8,

    /// User rating out of 5
    pub rating: f64,

    /// Amenities worth knowing about
    pub amenities: Vec<String>,

    /// Estimated nightly cost in the itinerary currency
    pub estimated_nightly_cost: f64,
}
