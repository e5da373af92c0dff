use super::*;

fn tour(id: &str, title: &str, city: &str, category: &str, fee: f64) -> Tour {
    Tour {
        id: id.to_owned(),
        guide_id: "g1".to_owned(),
        guide: None,
        title: title.to_owned(),
        description: format!("{title} through the back streets"),
        itinerary: Vec::new(),
        tour_fee: fee,
        duration_days: 1,
        meeting_point: None,
        max_group_size: 8,
        city: city.to_owned(),
        country: None,
        language: "English".to_owned(),
        category: category.to_owned(),
        images: Vec::new(),
        total_reviews: None,
        rating: None,
        featured: false,
        active: true,
        created_at: None,
    }
}

fn catalog() -> Vec<Tour> {
    vec![
        tour("a", "Alfama Food Walk", "Lisbon", "Food", 45.0),
        tour("b", "Harbor Kayak", "Porto", "Adventure", 80.0),
        tour("c", "Night Market Tour", "Lisbon", "Food", 30.0),
    ]
}

#[test]
fn filter_matches_title_case_insensitively() {
    let found = filter_tours(&catalog(), "ALFAMA", None, 0.0, PRICE_CEILING);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a");
}

#[test]
fn filter_matches_location_and_description() {
    let by_city = filter_tours(&catalog(), "porto", None, 0.0, PRICE_CEILING);
    assert_eq!(by_city.len(), 1);
    assert_eq!(by_city[0].id, "b");

    let by_description = filter_tours(&catalog(), "back streets", None, 0.0, PRICE_CEILING);
    assert_eq!(by_description.len(), 3);
}

#[test]
fn filter_by_category_is_exact() {
    let food = filter_tours(&catalog(), "", Some("Food"), 0.0, PRICE_CEILING);
    assert_eq!(food.len(), 2);
    assert!(filter_tours(&catalog(), "", Some("food"), 0.0, PRICE_CEILING).is_empty());
}

#[test]
fn price_bounds_are_inclusive() {
    let found = filter_tours(&catalog(), "", None, 30.0, 45.0);
    let ids: Vec<&str> = found.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn sort_orders_by_price_and_rating() {
    let mut tours = catalog();
    sort_tours(&mut tours, SortOrder::PriceLow);
    assert_eq!(tours[0].id, "c");
    sort_tours(&mut tours, SortOrder::PriceHigh);
    assert_eq!(tours[0].id, "b");

    let mut tours = catalog();
    tours[2].rating = Some(4.9);
    tours[0].rating = Some(4.1);
    sort_tours(&mut tours, SortOrder::Rating);
    assert_eq!(tours[0].id, "c");
}

#[test]
fn recommended_sort_floats_featured_listings() {
    let mut tours = catalog();
    tours[2].featured = true;
    sort_tours(&mut tours, SortOrder::Recommended);
    assert_eq!(tours[0].id, "c");
    // Stable: the rest keep catalog order.
    assert_eq!(tours[1].id, "a");
    assert_eq!(tours[2].id, "b");
}

#[test]
fn active_filter_count_tracks_non_default_filters() {
    let mut state = ExploreState::default();
    assert_eq!(state.active_filter_count(), 0);
    state.query = "food".to_owned();
    state.price_max = 100.0;
    assert_eq!(state.active_filter_count(), 2);
    state.clear_filters();
    assert_eq!(state.active_filter_count(), 0);
}
