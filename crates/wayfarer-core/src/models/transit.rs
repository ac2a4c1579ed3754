//! Transportation facet models.

use serde::{Deserialize, Serialize};

/// Long-distance and local transportation guidance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransportationGuide {
    /// Options for reaching the destination
    pub long_distance: Vec<TransportationOption>,

    /// Suggestions for getting around once there
    pub local: Vec<LocalSuggestion>,
}

/// One way of reaching the destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportationOption {
    /// Mode of transport, e.g. "Flight" or "Train"
    pub mode: String,

    /// Route detail, e.g. "Direct flight from Mumbai (BOM) to Goa (GOI)"
    pub details: String,

    /// Estimated cost per traveller
    pub estimated_cost: f64,

    /// Journey duration label
    pub duration: String,

    /// Example operators for this mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_examples: Vec<String>,
}

/// A way of getting around at the destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalSuggestion {
    /// Mode of transport, e.g. "Scooter" or "Ride-hailing"
    pub mode: String,

    /// A brief description or tip
    pub suggestion: String,

    /// Typical cost range label, e.g. "$10-15/day"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost_range: Option<String>,
}
