use super::*;

#[test]
fn role_round_trips_its_wire_strings() {
    assert_eq!(serde_json::to_string(&Role::Admin).ok().as_deref(), Some("\"ADMIN\""));
    let role: Role = serde_json::from_str("\"GUIDE\"").expect("known role");
    assert_eq!(role, Role::Guide);
}

#[test]
fn unknown_role_strings_fall_back_to_tourist() {
    let role: Role = serde_json::from_str("\"MODERATOR\"").expect("fallback role");
    assert_eq!(role, Role::Tourist);
}

#[test]
fn user_without_a_role_defaults_to_tourist() {
    let user: User = serde_json::from_str(r#"{"id":"1","name":"Ana","email":"ana@x.com"}"#).expect("minimal user");
    assert_eq!(user.role, Role::Tourist);
    assert!(user.languages.is_empty());
}

#[test]
fn tour_accepts_both_active_flag_spellings() {
    let base = r#"{
        "id":"t1","guideId":"g1","title":"Walk","description":"d",
        "tourFee":45.0,"durationDays":1,"maxGroupSize":8,
        "city":"Lisbon","language":"English","category":"Food"
    }"#;
    let tour: Tour = serde_json::from_str(base).expect("minimal tour");
    assert!(tour.active, "active defaults to true when omitted");

    let paused = base.replacen("{", r#"{"isActive":false,"#, 1);
    let tour: Tour = serde_json::from_str(&paused).expect("isActive spelling");
    assert!(!tour.active);
}

#[test]
fn tour_accepts_both_rating_spellings() {
    let body = r#"{
        "id":"t1","guideId":"g1","title":"Walk","description":"d",
        "tourFee":45.0,"durationDays":1,"maxGroupSize":8,
        "city":"Lisbon","language":"English","category":"Food",
        "avgRating":4.5
    }"#;
    let tour: Tour = serde_json::from_str(body).expect("avgRating spelling");
    assert_eq!(tour.rating, Some(4.5));
}

#[test]
fn tour_location_includes_the_country_when_present() {
    let mut tour: Tour = serde_json::from_str(
        r#"{
        "id":"t1","guideId":"g1","title":"Walk","description":"d",
        "tourFee":45.0,"durationDays":1,"maxGroupSize":8,
        "city":"Lisbon","country":"Portugal","language":"English","category":"Food"
    }"#,
    )
    .expect("tour with country");
    assert_eq!(tour.location(), "Lisbon, Portugal");

    tour.country = None;
    assert_eq!(tour.location(), "Lisbon");
    tour.country = Some(String::new());
    assert_eq!(tour.location(), "Lisbon");
}

#[test]
fn booking_status_uses_screaming_snake_wire_strings() {
    assert_eq!(serde_json::to_string(&BookingStatus::Confirmed).ok().as_deref(), Some("\"CONFIRMED\""));
    let status: BookingStatus = serde_json::from_str("\"CANCELLED\"").expect("known status");
    assert_eq!(status, BookingStatus::Cancelled);
}

#[test]
fn booking_request_serializes_camel_case() {
    let request = BookingRequest {
        listing_id: "t1".to_owned(),
        requested_date: "2026-09-01".to_owned(),
        group_size: 3,
        total_price: 135.0,
    };
    let raw = serde_json::to_string(&request).expect("serializable request");
    assert!(raw.contains("\"listingId\":\"t1\""));
    assert!(raw.contains("\"requestedDate\":\"2026-09-01\""));
    assert!(raw.contains("\"groupSize\":3"));
}
