//! Weather facet models.

use serde::{Deserialize, Serialize};

/// Weather outlook covering every day of the trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    /// One forecast entry per trip day, in day order
    pub daily: Vec<DailyForecast>,

    /// What to pack given the forecast
    pub packing_recommendation: String,

    /// One-paragraph summary of the whole window
    pub weekly_summary: String,
}

/// Forecast for a single trip day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    /// Trip day number this forecast covers
    pub day: u32,

    /// Daytime high in degrees Celsius
    pub high_celsius: f64,

    /// Overnight low in degrees Celsius
    pub low_celsius: f64,

    /// Perceived temperature in degrees Celsius
    pub feels_like_celsius: f64,

    /// Relative humidity, 0-100
    pub humidity_percent: u8,

    /// UV index label, e.g. "7 (High)"
    pub uv_index: String,

    /// Probability of rain, 0-100
    pub chance_of_rain_percent: u8,

    /// Short sky description, e.g. "Partly cloudy"
    pub description: String,
}
