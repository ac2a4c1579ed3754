//! A deterministic, offline itinerary generator.

use async_trait::async_trait;
use jiff::civil::Date;

use super::{GeneratorResult, ItineraryGenerator};
use crate::models::{
    AccommodationOptions, Activity, ActivityKind, AdvisorySeverity, CoreItinerary, CostBreakdown,
    DailyForecast, DayPlan, FacetSlot, FoodGuide, Hotel, ImageRef, LocalSuggestion, LocationPoint,
    PriceRange, Priority, Restaurant, TransportationGuide, TransportationOption, TravelAdvisory,
    TravelDetails, TripSummary, WeatherReport,
};
use crate::params::{TravelStyle, TripParameters};

const DAY_TIPS: [&str; 4] = [
    "Start early to beat the heat and the queues.",
    "Keep small change handy for local transport.",
    "Book popular activities a day ahead.",
    "Ask your host where the locals eat, not where tourists do.",
];

const SKY: [&str; 5] = [
    "Sunny",
    "Partly cloudy",
    "Light showers",
    "Clear skies",
    "Humid and bright",
];

const STREETS: [&str; 4] = [
    "Harbour Road",
    "Old Market Lane",
    "Temple Street",
    "Palm Avenue",
];

const SPECIALTIES: [&str; 5] = [
    "Slow-cooked regional curry",
    "Market-morning flatbreads",
    "Grilled catch of the day",
    "Clay-oven street snacks",
    "Toddy-shop desserts",
];

/// Generates a plausible itinerary purely from the trip parameters.
///
/// The same parameters always produce the same itinerary, every fetch
/// succeeds, and nothing leaves the process. This backs the CLI when no
/// other generator is configured and keeps the test suite hermetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleGenerator;

/// FNV-1a over the text, used to derive stable pseudo-random picks.
fn seed64(text: &str) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    for byte in text.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn pick<'a>(options: &'a [&'a str], seed: u64) -> &'a str {
    options[(seed % options.len() as u64) as usize]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn daily_rate(style: TravelStyle) -> f64 {
    match style {
        TravelStyle::Economy => 60.0,
        TravelStyle::Standard => 140.0,
        TravelStyle::Luxury => 350.0,
    }
}

fn style_multiplier(style: TravelStyle) -> f64 {
    match style {
        TravelStyle::Economy => 1.0,
        TravelStyle::Standard => 1.6,
        TravelStyle::Luxury => 3.2,
    }
}

/// Interests with blanks dropped, falling back to a neutral theme so the
/// generator stays total even on degenerate input.
fn themes(params: &TripParameters) -> Vec<String> {
    let cleaned: Vec<String> = params
        .interests
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();
    if cleaned.is_empty() {
        vec!["local culture".to_string()]
    } else {
        cleaned
    }
}

fn build_breakdown(params: &TripParameters, duration: u32) -> CostBreakdown {
    let mut raw = daily_rate(params.travel_style) * f64::from(params.travellers) * f64::from(duration);
    if let Some(cap) = params.budget {
        if raw > cap {
            raw = cap;
        }
    }
    CostBreakdown {
        stay: round2(raw * 0.38),
        travel: round2(raw * 0.27),
        food: round2(raw * 0.18),
        activities: round2(raw * 0.12),
        miscellaneous: round2(raw * 0.05),
    }
}

fn transfer_details(seed: u64) -> TravelDetails {
    TravelDetails {
        distance: format!("{} km", 150 + seed % 1650),
        duration: format!("{}h {:02}m", 1 + seed % 7, (seed / 7) % 60),
    }
}

fn day_title(params: &TripParameters, duration: u32, day: u32, seed: u64) -> String {
    if day == 1 {
        return format!("Arrival in {}", params.destination);
    }
    if day == duration {
        return format!("Farewell, {}", params.destination);
    }
    let themes = themes(params);
    let theme = &themes[((day - 1) as usize) % themes.len()];
    match (seed + u64::from(day)) % 4 {
        0 => format!("A day of {theme}"),
        1 => format!("{} {theme} trail", params.destination),
        2 => format!("Deep dive into {theme}"),
        _ => format!("{theme} from morning to dusk"),
    }
}

fn first_day_activities(params: &TripParameters, seed: u64) -> Vec<Activity> {
    let travellers = f64::from(params.travellers);
    let fare = (40.0 + (seed % 90) as f64) * style_multiplier(params.travel_style);
    vec![
        Activity {
            time: "09:00".to_string(),
            description: format!(
                "Journey from {} to {}",
                params.departure_city, params.destination
            ),
            kind: ActivityKind::Travel,
            estimated_cost: round2(fare * travellers),
            priority: Priority::Medium,
            travel_details: Some(transfer_details(seed)),
            selected_flight: None,
        },
        Activity {
            time: "14:00".to_string(),
            description: "Check in and drop your bags".to_string(),
            kind: ActivityKind::Accommodation,
            estimated_cost: 0.0,
            priority: Priority::Medium,
            travel_details: None,
            selected_flight: None,
        },
        Activity {
            time: "19:00".to_string(),
            description: format!("First dinner of {} specialties", params.destination),
            kind: ActivityKind::Food,
            estimated_cost: round2(14.0 * travellers),
            priority: Priority::Medium,
            travel_details: None,
            selected_flight: None,
        },
    ]
}

fn middle_day_activities(params: &TripParameters, day: u32, seed: u64) -> Vec<Activity> {
    let travellers = f64::from(params.travellers);
    let themes = themes(params);
    let theme = &themes[((day - 1) as usize) % themes.len()];
    let jitter = ((seed + u64::from(day) * 17) % 9) as f64;
    vec![
        Activity {
            time: "09:30".to_string(),
            description: format!("Morning walk through {}'s old quarter", params.destination),
            kind: ActivityKind::Sightseeing,
            estimated_cost: round2((6.0 + jitter) * travellers),
            priority: Priority::Medium,
            travel_details: None,
            selected_flight: None,
        },
        Activity {
            time: "13:00".to_string(),
            description: format!("Guided {theme} experience"),
            kind: ActivityKind::Activity,
            estimated_cost: round2((18.0 + jitter) * travellers),
            priority: Priority::Medium,
            travel_details: None,
            selected_flight: None,
        },
        Activity {
            time: "19:30".to_string(),
            description: "Dinner at a neighbourhood favourite".to_string(),
            kind: ActivityKind::Food,
            estimated_cost: round2((16.0 + jitter) * travellers),
            priority: Priority::Medium,
            travel_details: None,
            selected_flight: None,
        },
    ]
}

fn last_day_activities(params: &TripParameters, seed: u64) -> Vec<Activity> {
    let travellers = f64::from(params.travellers);
    let fare = (40.0 + (seed % 90) as f64) * style_multiplier(params.travel_style);
    vec![
        Activity {
            time: "09:00".to_string(),
            description: "Souvenir hunt and a slow breakfast".to_string(),
            kind: ActivityKind::Activity,
            estimated_cost: round2(10.0 * travellers),
            priority: Priority::Medium,
            travel_details: None,
            selected_flight: None,
        },
        Activity {
            time: "15:00".to_string(),
            description: format!("Return journey to {}", params.departure_city),
            kind: ActivityKind::Travel,
            estimated_cost: round2(fare * travellers),
            priority: Priority::Medium,
            travel_details: Some(transfer_details(seed.rotate_left(16))),
            selected_flight: None,
        },
    ]
}

fn build_day(params: &TripParameters, duration: u32, day: u32, seed: u64) -> DayPlan {
    let activities = if day == 1 {
        first_day_activities(params, seed)
    } else if day == duration {
        last_day_activities(params, seed)
    } else {
        middle_day_activities(params, day, seed)
    };
    DayPlan {
        day,
        title: day_title(params, duration, day, seed),
        activities,
        tip: pick(&DAY_TIPS, seed + u64::from(day)).to_string(),
        image: FacetSlot::Missing,
    }
}

fn hotel(
    name: String,
    street_seed: u64,
    destination: &str,
    star_rating: u8,
    rating: f64,
    amenities: &[&str],
    nightly: f64,
) -> Hotel {
    Hotel {
        name,
        address: format!(
            "{} {}, {}",
            1 + street_seed % 200,
            pick(&STREETS, street_seed),
            destination
        ),
        star_rating,
        rating: round1(rating),
        amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        estimated_nightly_cost: round2(nightly),
    }
}

#[async_trait]
impl ItineraryGenerator for SampleGenerator {
    async fn core_itinerary(&self, params: &TripParameters) -> GeneratorResult<CoreItinerary> {
        let seed = seed64(&format!("{}|{}", params.destination, params.departure_city));
        let duration = params.duration_days();
        let breakdown = build_breakdown(params, duration);
        let themes = themes(params);

        let style_word = match params.travel_style {
            TravelStyle::Economy => "Backpack Trail",
            TravelStyle::Standard => "Escape",
            TravelStyle::Luxury => "Indulgence",
        };

        Ok(CoreItinerary {
            title: format!("{}-Day {} {}", duration, params.destination, style_word),
            total_estimated_cost: round2(breakdown.total()),
            currency: "USD".to_string(),
            summary: TripSummary {
                description: format!(
                    "A {}-day {} trip from {} to {}, built around {}.",
                    duration,
                    params.travel_style.as_str().to_lowercase(),
                    params.departure_city,
                    params.destination,
                    themes.join(", ")
                ),
                highlights: themes
                    .iter()
                    .take(3)
                    .map(|t| format!("{} in {}", capitalize(t), params.destination))
                    .collect(),
            },
            cost_breakdown: breakdown,
            schedule: (1..=duration)
                .map(|day| build_day(params, duration, day, seed))
                .collect(),
        })
    }

    async fn accommodation(
        &self,
        params: &TripParameters,
    ) -> GeneratorResult<AccommodationOptions> {
        let d = &params.destination;
        let seed = seed64(d);
        Ok(AccommodationOptions {
            budget: vec![
                hotel(
                    format!("{d} Backpackers Hostel"),
                    seed,
                    d,
                    2,
                    3.6 + (seed % 9) as f64 / 10.0,
                    &["Free Wi-Fi", "Shared kitchen"],
                    18.0 + (seed % 18) as f64,
                ),
                hotel(
                    "Old Quarter Guesthouse".to_string(),
                    seed.rotate_left(8),
                    d,
                    3,
                    3.8 + (seed % 7) as f64 / 10.0,
                    &["Free Wi-Fi", "Rooftop terrace"],
                    24.0 + (seed % 14) as f64,
                ),
            ],
            standard: vec![
                hotel(
                    format!("Hotel {d} Central"),
                    seed.rotate_left(16),
                    d,
                    3,
                    4.0 + (seed % 6) as f64 / 10.0,
                    &["Free Wi-Fi", "Breakfast included", "Air conditioning"],
                    65.0 + (seed % 40) as f64,
                ),
                hotel(
                    "Seabreeze Residency".to_string(),
                    seed.rotate_left(24),
                    d,
                    4,
                    4.1 + (seed % 5) as f64 / 10.0,
                    &["Breakfast included", "Pool", "Parking"],
                    82.0 + (seed % 30) as f64,
                ),
            ],
            luxury: vec![
                hotel(
                    format!("The Grand {d}"),
                    seed.rotate_left(32),
                    d,
                    5,
                    4.5 + (seed % 4) as f64 / 10.0,
                    &["Pool", "Spa", "Sea-view rooms", "Airport transfer"],
                    210.0 + (seed % 120) as f64,
                ),
                hotel(
                    format!("{d} Palace Resort"),
                    seed.rotate_left(40),
                    d,
                    5,
                    4.4 + (seed % 5) as f64 / 10.0,
                    &["Private beach", "Spa", "Butler service"],
                    260.0 + (seed % 150) as f64,
                ),
            ],
        })
    }

    async fn transportation(
        &self,
        params: &TripParameters,
    ) -> GeneratorResult<TransportationGuide> {
        let seed = seed64(&params.destination);
        let mult = style_multiplier(params.travel_style);
        Ok(TransportationGuide {
            long_distance: vec![
                TransportationOption {
                    mode: "Flight".to_string(),
                    details: format!(
                        "Direct flight from {} to {}",
                        params.departure_city, params.destination
                    ),
                    estimated_cost: round2((70.0 + (seed % 60) as f64) * mult),
                    duration: format!("{}h {:02}m", 1 + seed % 4, (seed / 3) % 60),
                    provider_examples: vec![
                        "Meridian Airways".to_string(),
                        "Skyline Connect".to_string(),
                    ],
                },
                TransportationOption {
                    mode: "Train".to_string(),
                    details: format!(
                        "Overnight rail from {} with sleeper berths",
                        params.departure_city
                    ),
                    estimated_cost: round2((22.0 + (seed % 25) as f64) * mult),
                    duration: format!("{}h 30m", 8 + seed % 5),
                    provider_examples: vec!["National Rail".to_string()],
                },
            ],
            local: vec![
                LocalSuggestion {
                    mode: "Ride-hailing".to_string(),
                    suggestion: "Apps work well in the city centre; agree fares up front elsewhere."
                        .to_string(),
                    estimated_cost_range: Some("$2-6 per ride".to_string()),
                },
                LocalSuggestion {
                    mode: "Scooter rental".to_string(),
                    suggestion: "The easiest way to reach beaches and viewpoints at your own pace."
                        .to_string(),
                    estimated_cost_range: Some("$8-12 per day".to_string()),
                },
                LocalSuggestion {
                    mode: "Local bus".to_string(),
                    suggestion: "Cheap and frequent on main routes; keep exact change ready."
                        .to_string(),
                    estimated_cost_range: None,
                },
            ],
        })
    }

    async fn food(&self, params: &TripParameters) -> GeneratorResult<FoodGuide> {
        let d = &params.destination;
        let seed = seed64(d);
        let specialties: Vec<String> = (0..3_u64)
            .map(|i| pick(&SPECIALTIES, seed + i).to_string())
            .collect();
        Ok(FoodGuide {
            restaurants: vec![
                Restaurant {
                    name: format!("{d} Tiffin House"),
                    cuisine: "Street food".to_string(),
                    estimated_cost_per_person: round2(6.0 + (seed % 6) as f64),
                    rating: round1(4.2 + (seed % 6) as f64 / 10.0),
                    price_range: PriceRange::Budget,
                    must_try_dishes: specialties.clone(),
                    ambience: "Counter seats and constant bustle".to_string(),
                    notes: "Cash only; go before the lunch rush.".to_string(),
                },
                Restaurant {
                    name: "The Copper Kettle".to_string(),
                    cuisine: "Regional".to_string(),
                    estimated_cost_per_person: round2(16.0 + (seed % 10) as f64),
                    rating: round1(4.3 + (seed % 5) as f64 / 10.0),
                    price_range: PriceRange::Moderate,
                    must_try_dishes: vec![specialties[0].clone()],
                    ambience: "Courtyard tables under old trees".to_string(),
                    notes: "Reservations help on weekends.".to_string(),
                },
                Restaurant {
                    name: "Harbour Lights".to_string(),
                    cuisine: "Coastal fine dining".to_string(),
                    estimated_cost_per_person: round2(42.0 + (seed % 20) as f64),
                    rating: round1(4.5 + (seed % 4) as f64 / 10.0),
                    price_range: PriceRange::Upscale,
                    must_try_dishes: vec!["Tasting menu".to_string()],
                    ambience: "White linen with a waterfront view".to_string(),
                    notes: "Book a sunset table a few days ahead.".to_string(),
                },
            ],
            local_specialties: specialties,
            tip: format!(
                "Follow the lunchtime queues: the busiest small places in {d} are usually the best value."
            ),
        })
    }

    async fn weather(
        &self,
        destination: &str,
        start_date: Date,
        end_date: Date,
    ) -> GeneratorResult<WeatherReport> {
        let seed = seed64(destination);
        let days = (end_date - start_date).get_days();
        let duration = if days < 0 { 0 } else { days as u32 + 1 };
        let base = 16.0 + (seed % 14) as f64;

        let daily: Vec<DailyForecast> = (1..=duration)
            .map(|day| {
                let wobble = ((seed + u64::from(day) * 3) % 6) as f64;
                let high = base + 4.0 + wobble;
                let low = base - 3.0 + f64::from(day % 3);
                let uv_index = if high >= 30.0 {
                    "9 (Very High)"
                } else if high >= 25.0 {
                    "7 (High)"
                } else {
                    "5 (Moderate)"
                };
                DailyForecast {
                    day,
                    high_celsius: round1(high),
                    low_celsius: round1(low),
                    feels_like_celsius: round1(high + 1.5),
                    humidity_percent: (48 + (seed + u64::from(day) * 7) % 40) as u8,
                    uv_index: uv_index.to_string(),
                    chance_of_rain_percent: ((seed + u64::from(day) * 13) % 70) as u8,
                    description: pick(&SKY, seed + u64::from(day)).to_string(),
                }
            })
            .collect();

        let avg_high = if daily.is_empty() {
            base
        } else {
            daily.iter().map(|d| d.high_celsius).sum::<f64>() / daily.len() as f64
        };
        let packing_recommendation = if avg_high >= 28.0 {
            "Light cottons, a sun hat, and high-SPF sunscreen.".to_string()
        } else if avg_high >= 18.0 {
            "Light layers with one warm piece for the evenings.".to_string()
        } else {
            "Warm layers and a windproof jacket.".to_string()
        };

        Ok(WeatherReport {
            daily,
            packing_recommendation,
            weekly_summary: format!(
                "Mostly {} with daytime highs around {:.0}°C.",
                pick(&SKY, seed).to_lowercase(),
                avg_high
            ),
        })
    }

    async fn advisories(
        &self,
        destination: &str,
        _start_date: Date,
        _end_date: Date,
    ) -> GeneratorResult<Vec<TravelAdvisory>> {
        Ok(vec![
            TravelAdvisory {
                title: "Standard precautions".to_string(),
                details: format!(
                    "No unusual risks reported for {destination} in this window. Keep copies of your documents."
                ),
                severity: AdvisorySeverity::Low,
            },
            TravelAdvisory {
                title: "Seasonal crowds".to_string(),
                details: format!(
                    "Expect heavier crowds around {destination}'s main sights; book timed entries where possible."
                ),
                severity: AdvisorySeverity::Medium,
            },
        ])
    }

    async fn locations(
        &self,
        schedule: &[DayPlan],
        destination: &str,
    ) -> GeneratorResult<Vec<LocationPoint>> {
        let seed = seed64(destination);
        let base_lat = (seed % 120_000) as f64 / 1000.0 - 60.0;
        let base_lng = ((seed >> 8) % 300_000) as f64 / 1000.0 - 150.0;
        Ok(schedule
            .iter()
            .map(|day| LocationPoint {
                name: day.title.clone(),
                lat: base_lat + 0.01 * f64::from(day.day),
                lng: base_lng + 0.008 * f64::from(day.day),
                day: day.day,
            })
            .collect())
    }

    async fn day_image(&self, prompt: &str) -> GeneratorResult<ImageRef> {
        Ok(ImageRef::new(format!("sample:image/{:016x}", seed64(prompt))))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn params() -> TripParameters {
        TripParameters {
            destination: "Goa".to_string(),
            departure_city: "Mumbai".to_string(),
            start_date: date(2026, 3, 3),
            end_date: date(2026, 3, 5),
            travellers: 2,
            travel_style: TravelStyle::Standard,
            budget: None,
            interests: vec!["Beaches".to_string(), "food".to_string()],
        }
    }

    #[tokio::test]
    async fn same_parameters_produce_the_same_itinerary() {
        let generator = SampleGenerator;
        let first = generator.core_itinerary(&params()).await.unwrap();
        let second = generator.core_itinerary(&params()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn schedule_covers_every_day_in_order() {
        let core = SampleGenerator.core_itinerary(&params()).await.unwrap();
        assert_eq!(core.schedule.len(), 3);
        for (index, day) in core.schedule.iter().enumerate() {
            assert_eq!(day.day, index as u32 + 1);
            assert!(!day.activities.is_empty());
        }
    }

    #[tokio::test]
    async fn breakdown_sums_to_the_total() {
        let core = SampleGenerator.core_itinerary(&params()).await.unwrap();
        assert!((core.total_estimated_cost - core.cost_breakdown.total()).abs() < 0.005);
    }

    #[tokio::test]
    async fn budget_cap_is_respected() {
        let mut capped = params();
        capped.budget = Some(100.0);
        let core = SampleGenerator.core_itinerary(&capped).await.unwrap();
        assert!(core.total_estimated_cost <= 100.0);
    }

    #[tokio::test]
    async fn weather_covers_the_whole_window() {
        let report = SampleGenerator
            .weather("Goa", date(2026, 3, 3), date(2026, 3, 5))
            .await
            .unwrap();
        assert_eq!(report.daily.len(), 3);
        assert_eq!(report.daily[2].day, 3);
    }

    #[tokio::test]
    async fn locations_follow_the_schedule() {
        let core = SampleGenerator.core_itinerary(&params()).await.unwrap();
        let points = SampleGenerator
            .locations(&core.schedule, "Goa")
            .await
            .unwrap();
        assert_eq!(points.len(), core.schedule.len());
        assert_eq!(points[0].name, core.schedule[0].title);
        assert!(points.iter().all(|p| p.lat.abs() <= 90.0 && p.lng.abs() <= 180.0));
    }
}
