#[cfg(test)]
mod model_tests {
    use serde_json::Value;

    use crate::models::{
        Activity, ActivityKind, AdvisorySeverity, CoreItinerary, CostBreakdown, DayPlan,
        FacetSlot, FoodGuide, ImageRef, ItineraryDocument, PriceRange, Priority, TransportationGuide,
        TripSummary,
    };

    fn create_test_day(day: u32) -> DayPlan {
        DayPlan {
            day,
            title: format!("Day {day} theme"),
            activities: vec![Activity {
                time: "09:00".to_string(),
                description: "Beach walk".to_string(),
                kind: ActivityKind::Sightseeing,
                estimated_cost: 0.0,
                priority: Priority::Medium,
                travel_details: None,
                selected_flight: None,
            }],
            tip: "Carry water".to_string(),
            image: FacetSlot::Missing,
        }
    }

    fn create_test_core(days: u32) -> CoreItinerary {
        CoreItinerary {
            title: "Goa in 3 Days".to_string(),
            total_estimated_cost: 840.0,
            currency: "USD".to_string(),
            summary: TripSummary {
                description: "A short coastal break.".to_string(),
                highlights: vec!["Beaches".to_string(), "Seafood".to_string()],
            },
            cost_breakdown: CostBreakdown {
                stay: 320.0,
                travel: 210.0,
                food: 170.0,
                activities: 90.0,
                miscellaneous: 50.0,
            },
            schedule: (1..=days).map(create_test_day).collect(),
        }
    }

    #[test]
    fn ready_slot_serializes_as_its_payload() {
        let slot: FacetSlot<u32> = FacetSlot::Ready(7);
        assert_eq!(serde_json::to_value(&slot).unwrap(), Value::from(7));
    }

    #[test]
    fn unsettled_slots_serialize_as_null() {
        let pending: FacetSlot<u32> = FacetSlot::Pending;
        let missing: FacetSlot<u32> = FacetSlot::Missing;
        assert_eq!(serde_json::to_value(&pending).unwrap(), Value::Null);
        assert_eq!(serde_json::to_value(&missing).unwrap(), Value::Null);
    }

    #[test]
    fn null_slot_rehydrates_as_missing() {
        let slot: FacetSlot<u32> = serde_json::from_str("null").unwrap();
        assert_eq!(slot, FacetSlot::Missing);
        let slot: FacetSlot<u32> = serde_json::from_str("3").unwrap();
        assert_eq!(slot, FacetSlot::Ready(3));
    }

    #[test]
    fn snapshot_excludes_unsettled_facets() {
        let mut document = create_test_core(2).into_document();
        document.food = FacetSlot::Ready(FoodGuide {
            restaurants: vec![],
            local_specialties: vec!["Fish curry".to_string()],
            tip: "Eat where the queue is".to_string(),
        });

        let value = serde_json::to_value(&document).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("food"));
        assert!(!object.contains_key("accommodation"));
        assert!(!object.contains_key("transportation"));
        assert!(!object.contains_key("weather"));
    }

    #[test]
    fn snapshot_excludes_day_images() {
        let mut document = create_test_core(1).into_document();
        document.schedule[0].image = FacetSlot::Ready(ImageRef::new("data:image/x;ref"));

        let value = serde_json::to_value(&document).unwrap();
        let day = &value["schedule"][0];
        assert!(day.get("image").is_none());
    }

    #[test]
    fn rehydrated_document_never_claims_in_flight_fetches() {
        let document = create_test_core(2).into_document();
        assert!(document.accommodation.is_pending());

        let raw = serde_json::to_string(&document).unwrap();
        let restored: ItineraryDocument = serde_json::from_str(&raw).unwrap();

        assert!(restored.accommodation.is_missing());
        assert!(restored.transportation.is_missing());
        assert!(restored.food.is_missing());
        assert!(restored.weather.is_missing());
        assert!(restored.schedule.iter().all(|d| d.image.is_missing()));
    }

    #[test]
    fn priority_defaults_to_medium_on_records_written_before_the_field() {
        let raw = r#"{
            "time": "10:00",
            "description": "Fort visit",
            "kind": "Sightseeing",
            "estimated_cost": 5.0
        }"#;
        let activity: Activity = serde_json::from_str(raw).unwrap();
        assert_eq!(activity.priority, Priority::Medium);
    }

    #[test]
    fn into_document_marks_every_facet_and_image_in_flight() {
        let document = create_test_core(3).into_document();
        assert!(document.accommodation.is_pending());
        assert!(document.transportation.is_pending());
        assert!(document.food.is_pending());
        assert!(document.weather.is_pending());
        assert!(document.schedule.iter().all(|d| d.image.is_pending()));
        assert!(!document.facets_settled());
    }

    #[test]
    fn facets_settled_accepts_any_settled_mix() {
        let mut document = create_test_core(1).into_document();
        document.accommodation = FacetSlot::Missing;
        document.transportation = FacetSlot::Ready(TransportationGuide::default());
        document.food = FacetSlot::Missing;
        document.weather = FacetSlot::Missing;
        assert!(document.facets_settled());
    }

    #[test]
    fn day_mut_finds_days_by_number_not_position() {
        let mut document = create_test_core(3).into_document();
        document.schedule.retain(|d| d.day != 2);

        assert!(document.day_mut(2).is_none());
        let day = document.day_mut(3).expect("day 3 retained");
        assert_eq!(day.day, 3);
    }

    #[test]
    fn cost_breakdown_total_sums_all_buckets() {
        let breakdown = CostBreakdown {
            stay: 1.0,
            travel: 2.0,
            food: 3.0,
            activities: 4.0,
            miscellaneous: 5.0,
        };
        assert!((breakdown.total() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn activity_kind_parses_case_insensitively() {
        assert_eq!(
            "travel".parse::<ActivityKind>().unwrap(),
            ActivityKind::Travel
        );
        assert_eq!("FOOD".parse::<ActivityKind>().unwrap(), ActivityKind::Food);
        assert!("boating".parse::<ActivityKind>().is_err());
    }

    #[test]
    fn priority_parses_and_round_trips() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn advisory_severity_orders_low_to_critical() {
        assert!(AdvisorySeverity::Low < AdvisorySeverity::Medium);
        assert!(AdvisorySeverity::High < AdvisorySeverity::Critical);
        assert_eq!(
            "critical".parse::<AdvisorySeverity>().unwrap(),
            AdvisorySeverity::Critical
        );
    }

    #[test]
    fn price_range_serializes_as_dollar_signs() {
        assert_eq!(
            serde_json::to_value(PriceRange::Moderate).unwrap(),
            Value::from("$$")
        );
        let parsed: PriceRange = serde_json::from_str("\"$$$\"").unwrap();
        assert_eq!(parsed, PriceRange::Upscale);
    }
}
