//! Food facet models.

use serde::{Deserialize, Serialize};

/// Restaurant recommendations and food guidance for the destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodGuide {
    /// Recommended places to eat
    pub restaurants: Vec<Restaurant>,

    /// Dishes and foods the destination is known for
    pub local_specialties: Vec<String>,

    /// One freeform eating-out tip for the destination
    #[serde(default)]
    pub tip: String,
}

/// One recommended restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Restaurant name
    pub name: String,

    /// Cuisine served, e.g. "Coastal" or "Street food"
    pub cuisine: String,

    /// Estimated cost per person in the itinerary currency
    pub estimated_cost_per_person: f64,

    /// User rating out of 5
    pub rating: f64,

    /// Relative price bracket
    pub price_range: PriceRange,

    /// Dishes worth ordering here
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_try_dishes: Vec<String>,

    /// Atmosphere description, e.g. "Beach shack" or "Fine dining"
    #[serde(default)]
    pub ambience: String,

    /// Anything else worth knowing
    #[serde(default)]
    pub notes: String,
}

/// Relative price bracket of a restaurant, rendered as dollar signs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceRange {
    /// Cheap eats
    #[serde(rename = "$")]
    Budget,

    /// Mid-range
    #[serde(rename = "$$")]
    Moderate,

    /// Splurge
    #[serde(rename = "$$$")]
    Upscale,
}

impl PriceRange {
    /// Convert to the canonical dollar-sign representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Upscale => "$$$",
        }
    }
}
