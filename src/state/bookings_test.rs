use super::*;

fn booking(id: &str, status: BookingStatus, total: f64) -> Booking {
    Booking {
        id: id.to_owned(),
        listing_id: "t1".to_owned(),
        listing: None,
        tourist_id: "u1".to_owned(),
        tourist: None,
        guide_id: "g1".to_owned(),
        requested_date: "2026-09-01".to_owned(),
        status,
        group_size: Some(2),
        total_price: total,
        created_at: None,
    }
}

fn listing(id: &str, active: bool, rating: Option<f64>) -> Tour {
    Tour {
        id: id.to_owned(),
        guide_id: "g1".to_owned(),
        guide: None,
        title: format!("Tour {id}"),
        description: String::new(),
        itinerary: Vec::new(),
        tour_fee: 45.0,
        duration_days: 1,
        meeting_point: None,
        max_group_size: 8,
        city: "Lisbon".to_owned(),
        country: None,
        language: "English".to_owned(),
        category: "Food".to_owned(),
        images: Vec::new(),
        total_reviews: None,
        rating,
        featured: false,
        active,
        created_at: None,
    }
}

#[test]
fn partition_splits_open_from_settled_bookings() {
    let bookings = vec![
        booking("a", BookingStatus::Pending, 90.0),
        booking("b", BookingStatus::Completed, 60.0),
        booking("c", BookingStatus::Confirmed, 45.0),
        booking("d", BookingStatus::Cancelled, 30.0),
    ];
    let (upcoming, past) = partition_bookings(&bookings);
    let upcoming_ids: Vec<&str> = upcoming.iter().map(|b| b.id.as_str()).collect();
    let past_ids: Vec<&str> = past.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(upcoming_ids, vec!["a", "c"]);
    assert_eq!(past_ids, vec!["b", "d"]);
}

#[test]
fn status_labels_cover_the_closed_set() {
    assert_eq!(status_label(BookingStatus::Pending), "Pending");
    assert_eq!(status_label(BookingStatus::Confirmed), "Confirmed");
    assert_eq!(status_label(BookingStatus::Completed), "Completed");
    assert_eq!(status_label(BookingStatus::Cancelled), "Cancelled");
    assert_eq!(status_class(BookingStatus::Pending), "status-badge--pending");
}

#[test]
fn guide_stats_counts_revenue_from_completed_bookings_only() {
    let bookings = vec![
        booking("a", BookingStatus::Pending, 90.0),
        booking("b", BookingStatus::Completed, 60.0),
        booking("c", BookingStatus::Completed, 40.0),
        booking("d", BookingStatus::Cancelled, 500.0),
    ];
    let stats = guide_stats(&[], &bookings);
    assert_eq!(stats.total_bookings, 4);
    assert_eq!(stats.pending_bookings, 1);
    assert!((stats.total_revenue - 100.0).abs() < f64::EPSILON);
}

#[test]
fn guide_stats_averages_listing_ratings_when_present() {
    let tours = vec![
        listing("a", true, Some(4.0)),
        listing("b", false, Some(5.0)),
        listing("c", true, None),
    ];
    let stats = guide_stats(&tours, &[]);
    assert_eq!(stats.active_tours, 2);
    assert_eq!(stats.rating, Some(4.5));

    let unrated = guide_stats(&[listing("d", true, None)], &[]);
    assert_eq!(unrated.rating, None);
}
