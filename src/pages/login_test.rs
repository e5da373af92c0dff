use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  ana@x.com  ", " secret123 "),
        Ok(("ana@x.com".to_owned(), "secret123".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret123"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ana@x.com", "   "), Err("Enter both email and password."));
}

#[test]
fn resolve_callback_url_defaults_to_root() {
    assert_eq!(resolve_callback_url(None), "/");
    assert_eq!(resolve_callback_url(Some(String::new())), "/");
    assert_eq!(resolve_callback_url(Some("/bookings".to_owned())), "/bookings");
}
