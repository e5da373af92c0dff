use super::*;

#[test]
fn endpoint_helpers_format_expected_paths() {
    assert_eq!(listing_endpoint("t1"), "/api/listings/t1");
    assert_eq!(listing_reviews_endpoint("t1"), "/api/listings/t1/reviews");
    assert_eq!(listing_toggle_endpoint("t1"), "/api/listings/t1/toggle");
    assert_eq!(guide_listings_endpoint("g1"), "/api/listings/guide/g1");
    assert_eq!(user_bookings_endpoint("u1"), "/api/bookings/u1");
    assert_eq!(booking_status_endpoint("b1"), "/api/bookings/b1/status");
    assert_eq!(user_ban_endpoint("u1"), "/api/users/u1/ban");
    assert_eq!(wishlist_entry_endpoint("w1"), "/api/wishlist/w1");
}

#[test]
fn bearer_formats_the_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn command_failed_message_formats_status() {
    assert_eq!(command_failed_message("toggle listing", 403), "toggle listing failed: 403");
}

#[test]
fn login_rejection_carries_the_server_message_verbatim() {
    let result = parse_login_response(false, r#"{"message":"Invalid email or password"}"#);
    assert_eq!(
        result,
        Err(AuthError::InvalidCredentials("Invalid email or password".to_owned()))
    );
}

#[test]
fn login_rejection_without_a_message_uses_the_fallback() {
    let result = parse_login_response(false, "");
    assert_eq!(result, Err(AuthError::InvalidCredentials("Login failed".to_owned())));
}

#[test]
fn login_success_extracts_user_and_token() {
    let body = r#"{"data":{"user":{"id":"1","name":"Ana","email":"ana@x.com","role":"TOURIST"},"token":"abc"}}"#;
    let session = parse_login_response(true, body).expect("valid login body");
    assert_eq!(session.user.id, "1");
    assert_eq!(session.token, "abc");
}

#[test]
fn register_success_yields_the_requested_role() {
    // Mirrors the 201 response for a new guide account.
    let body = r#"{"data":{"user":{"id":"1","name":"Ana","email":"ana@x.com","role":"GUIDE"},"token":"abc"}}"#;
    let session = parse_register_response(true, body).expect("valid register body");
    assert_eq!(session.user.role, Role::Guide);
    assert_eq!(session.token, "abc");
}

#[test]
fn register_rejection_uses_the_registration_condition() {
    let result = parse_register_response(false, r#"{"message":"Email already registered"}"#);
    assert_eq!(
        result,
        Err(AuthError::RegistrationFailed("Email already registered".to_owned()))
    );
    assert_eq!(
        parse_register_response(false, "{}"),
        Err(AuthError::RegistrationFailed("Registration failed".to_owned()))
    );
}

#[test]
fn malformed_success_bodies_surface_as_network_errors() {
    let result = parse_login_response(true, r#"{"data":{"token":"abc"}}"#);
    assert!(matches!(result, Err(AuthError::Network(_))));
}

#[test]
fn google_rejection_uses_its_own_fallback() {
    assert_eq!(
        parse_google_response(false, ""),
        Err(AuthError::InvalidCredentials("Google sign-in failed".to_owned()))
    );
}
