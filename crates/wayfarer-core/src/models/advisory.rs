//! Travel advisory and map location models.
//!
//! Both of these are session-scoped extras: they are fetched alongside the
//! document facets but live outside the document and are never persisted.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One safety or disruption notice for the destination and dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelAdvisory {
    /// Short headline, e.g. "Monsoon road closures"
    pub title: String,

    /// What the traveller should know or do
    pub details: String,

    /// How seriously to take it
    pub severity: AdvisorySeverity,
}

/// Severity of a travel advisory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AdvisorySeverity {
    /// Worth knowing, no action needed
    Low,

    /// Plan around it
    Medium,

    /// May disrupt parts of the trip
    High,

    /// Reconsider the affected plans
    Critical,
}

impl FromStr for AdvisorySeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(AdvisorySeverity::Low),
            "medium" => Ok(AdvisorySeverity::Medium),
            "high" => Ok(AdvisorySeverity::High),
            "critical" => Ok(AdvisorySeverity::Critical),
            _ => Err(format!("Invalid severity: {s}")),
        }
    }
}

impl AdvisorySeverity {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisorySeverity::Low => "Low",
            AdvisorySeverity::Medium => "Medium",
            AdvisorySeverity::High => "High",
            AdvisorySeverity::Critical => "Critical",
        }
    }

    /// Severity with a leading marker glyph for rendered reports.
    pub fn with_icon(&self) -> String {
        let icon = match self {
            AdvisorySeverity::Low => "○",
            AdvisorySeverity::Medium => "◆",
            AdvisorySeverity::High => "▲",
            AdvisorySeverity::Critical => "⚠",
        };
        format!("{} {}", icon, self.as_str())
    }
}

/// A named point of interest extracted from the schedule for map display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationPoint {
    /// Place name as it appears in the schedule
    pub name: String,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lng: f64,

    /// Trip day the place belongs to
    pub day: u32,
}
