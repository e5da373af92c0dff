use super::*;

fn tour_with_rating(rating: Option<f64>) -> Tour {
    Tour {
        id: "t1".to_owned(),
        guide_id: "g1".to_owned(),
        guide: None,
        title: "Old Town Walk".to_owned(),
        description: String::new(),
        itinerary: Vec::new(),
        tour_fee: 45.0,
        duration_days: 1,
        meeting_point: None,
        max_group_size: 8,
        city: "Lisbon".to_owned(),
        country: None,
        language: "English".to_owned(),
        category: "History".to_owned(),
        images: Vec::new(),
        total_reviews: None,
        rating,
        featured: false,
        active: true,
        created_at: None,
    }
}

fn review(rating: u32) -> Review {
    Review {
        id: format!("r{rating}"),
        listing_id: "t1".to_owned(),
        tourist_id: "u1".to_owned(),
        tourist: None,
        rating,
        comment: None,
        created_at: None,
    }
}

#[test]
fn booking_total_scales_with_group_size() {
    assert!((booking_total(45.0, 4) - 180.0).abs() < f64::EPSILON);
}

#[test]
fn validate_booking_input_requires_a_date() {
    assert_eq!(
        validate_booking_input("  ", "2", 8),
        Err("Pick a date for your tour.".to_owned())
    );
}

#[test]
fn validate_booking_input_bounds_group_size() {
    assert_eq!(
        validate_booking_input("2026-09-01", "0", 8),
        Err("Group size must be between 1 and 8.".to_owned())
    );
    assert_eq!(
        validate_booking_input("2026-09-01", "9", 8),
        Err("Group size must be between 1 and 8.".to_owned())
    );
    assert_eq!(
        validate_booking_input("2026-09-01", "not a number", 8),
        Err("Group size must be between 1 and 8.".to_owned())
    );
    assert_eq!(
        validate_booking_input("2026-09-01", " 3 ", 8),
        Ok(("2026-09-01".to_owned(), 3))
    );
}

#[test]
fn display_rating_prefers_the_server_aggregate() {
    let tour = tour_with_rating(Some(4.6));
    let reviews = vec![review(1)];
    assert_eq!(display_rating(&tour, &reviews), Some(4.6));
}

#[test]
fn display_rating_falls_back_to_loaded_reviews() {
    let tour = tour_with_rating(None);
    let reviews = vec![review(4), review(5)];
    assert_eq!(display_rating(&tour, &reviews), Some(4.5));
    assert_eq!(display_rating(&tour, &[]), None);
}
