//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with severity icons and structured sections
//! - Line-oriented output that composes into the full itinerary report

use std::fmt;

use crate::models::{
    AccommodationOptions, Activity, ActivityKind, AdvisorySeverity, DailyForecast, DayPlan,
    FacetSlot, FlightSelection, FoodGuide, Hotel, ImageRef, LocalSuggestion, LocationPoint,
    PriceRange, Priority, Restaurant, TransportationGuide, TransportationOption, TravelAdvisory,
    TripSummary, WeatherReport,
};
use crate::params::{TravelStyle, TravellerPreferences};

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for AdvisorySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FlightSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} to {}",
            self.airline, self.departure_time, self.arrival_time
        )
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {} ({}, ${:.2})",
            self.time, self.description, self.kind, self.estimated_cost
        )?;
        if self.priority != Priority::Medium {
            write!(f, " [{} priority]", self.priority)?;
        }
        writeln!(f)?;

        if let Some(details) = &self.travel_details {
            writeln!(f, "  - {}, {}", details.distance, details.duration)?;
        }
        if let Some(flight) = &self.selected_flight {
            writeln!(f, "  - Flight: {flight}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Day {}: {}", self.day, self.title)?;
        writeln!(f)?;

        for activity in &self.activities {
            write!(f, "{activity}")?;
        }

        if !self.tip.is_empty() {
            writeln!(f)?;
            writeln!(f, "Tip: {}", self.tip)?;
        }

        match &self.image {
            FacetSlot::Ready(image) => writeln!(f, "\nImage: {image}")?,
            FacetSlot::Pending => writeln!(f, "\nImage: still loading...")?,
            FacetSlot::Missing => {}
        }
        writeln!(f)
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        if !self.highlights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Highlights:")?;
            for highlight in &self.highlights {
                writeln!(f, "- {highlight}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} ({}* hotel, rated {:.1}/5, ${:.2}/night)",
            self.name, self.star_rating, self.rating, self.estimated_nightly_cost
        )?;
        writeln!(f, "  - {}", self.address)?;
        if !self.amenities.is_empty() {
            writeln!(f, "  - Amenities: {}", self.amenities.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for AccommodationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiers = [
            ("Budget", &self.budget),
            ("Standard", &self.standard),
            ("Luxury", &self.luxury),
        ];
        let mut first = true;
        for (label, hotels) in tiers {
            if hotels.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            writeln!(f, "**{label}**")?;
            for hotel in hotels {
                write!(f, "{hotel}")?;
            }
        }
        if first {
            writeln!(f, "No accommodation options listed.")?;
        }
        Ok(())
    }
}

impl fmt::Display for TransportationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {} (${:.2}, {})",
            self.mode, self.details, self.estimated_cost, self.duration
        )?;
        if !self.provider_examples.is_empty() {
            writeln!(f, "  - Providers: {}", self.provider_examples.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for LocalSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.mode, self.suggestion)?;
        if let Some(range) = &self.estimated_cost_range {
            write!(f, " ({range})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TransportationGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.long_distance.is_empty() && self.local.is_empty() {
            return writeln!(f, "No transportation options listed.");
        }
        if !self.long_distance.is_empty() {
            writeln!(f, "**Getting there**")?;
            for option in &self.long_distance {
                write!(f, "{option}")?;
            }
        }
        if !self.local.is_empty() {
            if !self.long_distance.is_empty() {
                writeln!(f)?;
            }
            writeln!(f, "**Getting around**")?;
            for suggestion in &self.local {
                write!(f, "{suggestion}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} ({}, {}) rated {:.1}/5, about ${:.2} per person",
            self.name, self.cuisine, self.price_range, self.rating, self.estimated_cost_per_person
        )?;
        if !self.must_try_dishes.is_empty() {
            writeln!(f, "  - Must try: {}", self.must_try_dishes.join(", "))?;
        }
        if !self.ambience.is_empty() {
            writeln!(f, "  - Ambience: {}", self.ambience)?;
        }
        if !self.notes.is_empty() {
            writeln!(f, "  - {}", self.notes)?;
        }
        Ok(())
    }
}

impl fmt::Display for FoodGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for restaurant in &self.restaurants {
            write!(f, "{restaurant}")?;
        }
        if !self.local_specialties.is_empty() {
            if !self.restaurants.is_empty() {
                writeln!(f)?;
            }
            writeln!(f, "Local specialties: {}", self.local_specialties.join(", "))?;
        }
        if !self.tip.is_empty() {
            writeln!(f)?;
            writeln!(f, "Tip: {}", self.tip)?;
        }
        if self.restaurants.is_empty() && self.local_specialties.is_empty() && self.tip.is_empty() {
            writeln!(f, "No dining suggestions listed.")?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Day {}: {:.0}°/{:.0}°C (feels like {:.0}°C), {}% rain, {}% humidity, UV {}",
            self.day,
            self.high_celsius,
            self.low_celsius,
            self.feels_like_celsius,
            self.chance_of_rain_percent,
            self.humidity_percent,
            self.uv_index
        )?;
        writeln!(f, "  - {}", self.description)
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.weekly_summary.is_empty() {
            writeln!(f, "{}", self.weekly_summary)?;
            writeln!(f)?;
        }
        for forecast in &self.daily {
            write!(f, "{forecast}")?;
        }
        if !self.packing_recommendation.is_empty() {
            if !self.daily.is_empty() {
                writeln!(f)?;
            }
            writeln!(f, "Packing: {}", self.packing_recommendation)?;
        }
        Ok(())
    }
}

impl fmt::Display for TravelAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}: {}", self.severity.with_icon(), self.title)?;
        if !self.details.is_empty() {
            writeln!(f, "  - {}", self.details)?;
        }
        Ok(())
    }
}

impl fmt::Display for LocationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Day {}: {} ({:.4}, {:.4})",
            self.day, self.name, self.lat, self.lng
        )
    }
}

impl fmt::Display for TravellerPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No preferences stored.");
        }
        if let Some(city) = &self.departure_city {
            writeln!(f, "- Departure city: {city}")?;
        }
        if let Some(style) = &self.travel_style {
            writeln!(f, "- Travel style: {style}")?;
        }
        if let Some(interests) = &self.interests {
            writeln!(f, "- Interests: {}", interests.join(", "))?;
        }
        Ok(())
    }
}
