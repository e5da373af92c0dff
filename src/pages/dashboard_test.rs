use super::*;
use crate::net::types::User;

fn signed_in(role: Role) -> SessionState {
    SessionState {
        user: Some(User {
            id: "u1".to_owned(),
            name: Some("Ana".to_owned()),
            email: Some("ana@x.com".to_owned()),
            role,
            image: None,
            profile_pic: None,
            bio: None,
            languages: Vec::new(),
            expertise: Vec::new(),
            daily_rate: None,
            created_at: None,
        }),
        token: Some("abc".to_owned()),
        restored: true,
    }
}

#[test]
fn anonymous_session_gets_login_prompt() {
    let session = SessionState {
        restored: true,
        ..SessionState::default()
    };
    assert_eq!(dashboard_variant(&session), DashboardVariant::LoginPrompt);
}

#[test]
fn admin_role_gets_admin_view() {
    assert_eq!(dashboard_variant(&signed_in(Role::Admin)), DashboardVariant::Admin);
}

#[test]
fn guide_role_gets_guide_view() {
    assert_eq!(dashboard_variant(&signed_in(Role::Guide)), DashboardVariant::Guide);
}

#[test]
fn tourist_role_gets_tourist_view() {
    assert_eq!(dashboard_variant(&signed_in(Role::Tourist)), DashboardVariant::Tourist);
}

#[test]
fn unrecognized_wire_role_lands_on_tourist_view() {
    // The wire fallback maps unknown role strings to `Tourist`, so the
    // dispatch's default branch is the tourist dashboard, not an error.
    let role: Role = serde_json::from_str("\"SUPERHOST\"").expect("role fallback");
    assert_eq!(dashboard_variant(&signed_in(role)), DashboardVariant::Tourist);
}
