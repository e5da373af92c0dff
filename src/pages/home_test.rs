use super::*;

fn tour(id: &str, featured: bool, active: bool) -> Tour {
    Tour {
        id: id.to_owned(),
        guide_id: "g1".to_owned(),
        guide: None,
        title: format!("Tour {id}"),
        description: String::new(),
        itinerary: Vec::new(),
        tour_fee: 50.0,
        duration_days: 1,
        meeting_point: None,
        max_group_size: 8,
        city: "Lisbon".to_owned(),
        country: Some("Portugal".to_owned()),
        language: "English".to_owned(),
        category: "Food".to_owned(),
        images: Vec::new(),
        total_reviews: None,
        rating: None,
        featured,
        active,
        created_at: None,
    }
}

#[test]
fn featured_tours_keeps_only_active_featured_listings() {
    let tours = vec![tour("a", true, true), tour("b", false, true), tour("c", true, false)];
    let picked = featured_tours(&tours);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].id, "a");
}

#[test]
fn featured_tours_caps_the_strip() {
    let tours: Vec<Tour> = (0..10).map(|i| tour(&i.to_string(), true, true)).collect();
    assert_eq!(featured_tours(&tours).len(), FEATURED_LIMIT);
}

#[test]
fn explore_search_href_omits_empty_queries() {
    assert_eq!(explore_search_href("  "), "/explore");
    assert_eq!(explore_search_href("lisbon"), "/explore?q=lisbon");
}
