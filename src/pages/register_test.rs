use super::*;

#[test]
fn validate_register_input_accepts_normal_signup() {
    assert_eq!(
        validate_register_input(" Ana ", "ana@x.com", "secret123"),
        Ok(("Ana".to_owned(), "ana@x.com".to_owned(), "secret123".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_name() {
    assert_eq!(validate_register_input("  ", "ana@x.com", "secret123"), Err("Enter your full name."));
}

#[test]
fn validate_register_input_rejects_bad_email() {
    assert_eq!(
        validate_register_input("Ana", "not-an-email", "secret123"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("Ana", "ana@x.com", "abc12"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn role_from_query_only_offers_signup_roles() {
    assert_eq!(role_from_query(Some("GUIDE")), Role::Guide);
    assert_eq!(role_from_query(Some("TOURIST")), Role::Tourist);
    // Admin accounts are provisioned, never self-registered.
    assert_eq!(role_from_query(Some("ADMIN")), Role::Tourist);
    assert_eq!(role_from_query(None), Role::Tourist);
}
