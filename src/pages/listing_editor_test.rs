use super::*;

fn valid_fields() -> ListingFields {
    ListingFields {
        title: "Alfama Food Walk".to_owned(),
        description: "Taste your way through Lisbon's oldest quarter.".to_owned(),
        itinerary: "Miradouro meetup\n\n  Tasca lunch  \nFado bar".to_owned(),
        fee: "45".to_owned(),
        duration: "1".to_owned(),
        meeting_point: "  Largo das Portas do Sol  ".to_owned(),
        max_group: "8".to_owned(),
        city: "Lisbon".to_owned(),
        country: String::new(),
        language: "English".to_owned(),
        category: "Food".to_owned(),
        images: String::new(),
    }
}

#[test]
fn parse_multiline_trims_and_drops_blanks() {
    assert_eq!(
        parse_multiline("one\n\n  two  \n   \nthree"),
        vec!["one".to_owned(), "two".to_owned(), "three".to_owned()]
    );
    assert!(parse_multiline("   \n  ").is_empty());
}

#[test]
fn build_listing_draft_assembles_the_payload() {
    let draft = build_listing_draft(&valid_fields()).expect("valid fields");
    assert_eq!(draft.title, "Alfama Food Walk");
    assert_eq!(draft.itinerary.len(), 3);
    assert!((draft.tour_fee - 45.0).abs() < f64::EPSILON);
    assert_eq!(draft.meeting_point.as_deref(), Some("Largo das Portas do Sol"));
    assert_eq!(draft.country, None);
    assert!(draft.images.is_empty());
}

#[test]
fn build_listing_draft_rejects_bad_numbers() {
    let mut fields = valid_fields();
    fields.fee = "free".to_owned();
    assert_eq!(build_listing_draft(&fields), Err("Enter a valid price per person."));

    let mut fields = valid_fields();
    fields.duration = "0".to_owned();
    assert_eq!(build_listing_draft(&fields), Err("Enter the tour length in days."));

    let mut fields = valid_fields();
    fields.max_group = "".to_owned();
    assert_eq!(build_listing_draft(&fields), Err("Enter the maximum group size."));
}

#[test]
fn build_listing_draft_requires_text_fields() {
    let mut fields = valid_fields();
    fields.title = "  ".to_owned();
    assert_eq!(build_listing_draft(&fields), Err("Enter a title."));

    let mut fields = valid_fields();
    fields.city = String::new();
    assert_eq!(build_listing_draft(&fields), Err("Enter the city."));
}

#[test]
fn fields_from_tour_round_trips_through_the_builder() {
    let tour = Tour {
        id: "t1".to_owned(),
        guide_id: "g1".to_owned(),
        guide: None,
        title: "Alfama Food Walk".to_owned(),
        description: "Taste your way through Lisbon.".to_owned(),
        itinerary: vec!["Meetup".to_owned(), "Lunch".to_owned()],
        tour_fee: 45.0,
        duration_days: 1,
        meeting_point: Some("Largo das Portas do Sol".to_owned()),
        max_group_size: 8,
        city: "Lisbon".to_owned(),
        country: Some("Portugal".to_owned()),
        language: "English".to_owned(),
        category: "Food".to_owned(),
        images: vec!["https://img.example/alfama.jpg".to_owned()],
        total_reviews: None,
        rating: None,
        featured: false,
        active: true,
        created_at: None,
    };

    let draft = build_listing_draft(&fields_from_tour(&tour)).expect("prefilled fields are valid");
    assert_eq!(draft.title, tour.title);
    assert_eq!(draft.itinerary, tour.itinerary);
    assert_eq!(draft.meeting_point, tour.meeting_point);
    assert_eq!(draft.country, tour.country);
    assert_eq!(draft.images, tour.images);
}
