use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;

fn sample_user(role: Role) -> User {
    User {
        id: "1".to_owned(),
        name: Some("Ana".to_owned()),
        email: Some("ana@x.com".to_owned()),
        role,
        image: None,
        profile_pic: None,
        bio: None,
        languages: vec!["English".to_owned()],
        expertise: Vec::new(),
        daily_rate: None,
        created_at: None,
    }
}

#[test]
fn phase_is_unknown_until_restore_completes() {
    let state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::Unknown);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_with_empty_storage_finishes_anonymous() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.restore(&storage);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.is_authenticated());
    assert!(state.restored);
}

#[test]
fn commit_then_fresh_restore_round_trips() {
    let storage = MemoryStorage::new();
    let user = sample_user(Role::Guide);

    let mut first = SessionState::default();
    first.restore(&storage);
    first.commit(&storage, user.clone(), "abc".to_owned());
    assert_eq!(first.phase(), SessionPhase::Authenticated);

    // Simulate a process restart: a fresh state restoring from the same
    // storage observes the committed values.
    let mut second = SessionState::default();
    second.restore(&storage);
    assert_eq!(second.user, Some(user));
    assert_eq!(second.token, Some("abc".to_owned()));
    assert_eq!(second.phase(), SessionPhase::Authenticated);
}

#[test]
fn restore_is_idempotent_for_unchanged_storage() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.commit(&storage, sample_user(Role::Tourist), "abc".to_owned());

    let mut once = SessionState::default();
    once.restore(&storage);
    let mut twice = once.clone();
    twice.restore(&storage);
    assert_eq!(once, twice);
}

#[test]
fn restore_swallows_corrupt_user_json() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc");
    storage.set(USER_KEY, "{not json");

    let mut state = SessionState::default();
    state.restore(&storage);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.restored);
}

#[test]
fn restore_ignores_a_lone_key() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc");

    let mut state = SessionState::default();
    state.restore(&storage);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn clear_removes_both_keys_and_signs_out() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.restore(&storage);
    state.commit(&storage, sample_user(Role::Tourist), "abc".to_owned());

    state.clear(&storage);
    assert!(!state.is_authenticated());
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn commit_over_an_existing_identity_replaces_it() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::default();
    state.restore(&storage);
    state.commit(&storage, sample_user(Role::Tourist), "first".to_owned());

    // Re-authenticating overwrites without passing through Anonymous.
    state.commit(&storage, sample_user(Role::Guide), "second".to_owned());
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("second"));
    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Guide));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("second"));
}
