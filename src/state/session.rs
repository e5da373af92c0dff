//! Session store: the single source of truth for the signed-in identity.
//!
//! DESIGN
//! ======
//! `user` and `token` move together — `restore`, `commit`, and `clear` are
//! the only mutators, and none of them can leave one set without the other.
//! Persistence goes through an injected [`KeyValueStorage`] so the lifecycle
//! is testable outside a browser. The app calls `restore` exactly once at
//! startup (the auth gate holds rendering until `restored` flips); after
//! that, only the auth operations touch this state.
//!
//! Two tabs racing `restore` against a `commit` in the other tab is left
//! undefined; there is no cross-tab coordination. Logout is purely local —
//! the backend is not told, so an issued bearer token stays valid until its
//! natural expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStorage;

/// Durable storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Durable storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Restoration has not finished; identity is not yet knowable.
    Unknown,
    /// Restoration finished with no signed-in user.
    Anonymous,
    /// A user is signed in.
    Authenticated,
}

/// In-memory session state, provided app-wide as `RwSignal<SessionState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// The signed-in account, if any.
    pub user: Option<User>,
    /// Opaque bearer token paired with `user`.
    pub token: Option<String>,
    /// True once the startup load-from-storage attempt has finished,
    /// whether or not it found a session.
    pub restored: bool,
}

impl SessionState {
    /// True iff a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Current lifecycle phase. `Unknown` is never re-entered once
    /// restoration completes.
    pub fn phase(&self) -> SessionPhase {
        match (self.restored, &self.user) {
            (false, _) => SessionPhase::Unknown,
            (true, Some(_)) => SessionPhase::Authenticated,
            (true, None) => SessionPhase::Anonymous,
        }
    }

    /// Load the persisted session, if any.
    ///
    /// Missing or unreadable values — including a user record that fails to
    /// deserialize — are treated identically to "no session"; this never
    /// errors. `restored` is set unconditionally.
    pub fn restore(&mut self, storage: &dyn KeyValueStorage) {
        match (storage.get(TOKEN_KEY), storage.get(USER_KEY)) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => {
                    self.user = Some(user);
                    self.token = Some(token);
                }
                Err(err) => {
                    log::warn!("stored session was unreadable, treating as signed out: {err}");
                    self.user = None;
                    self.token = None;
                }
            },
            _ => {
                self.user = None;
                self.token = None;
            }
        }
        self.restored = true;
    }

    /// Install `user`/`token` as the current identity and persist both.
    ///
    /// A fresh `restore` (e.g. after a reload) observes exactly these
    /// values. Committing over an existing identity replaces it without
    /// passing through the anonymous state.
    pub fn commit(&mut self, storage: &dyn KeyValueStorage, user: User, token: String) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                storage.set(USER_KEY, &raw);
                storage.set(TOKEN_KEY, &token);
            }
            Err(err) => {
                // Keep storage untouched rather than persist half a session.
                log::warn!("failed to persist session: {err}");
            }
        }
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Sign out: null both fields and remove both storage keys.
    pub fn clear(&mut self, storage: &dyn KeyValueStorage) {
        storage.remove(USER_KEY);
        storage.remove(TOKEN_KEY);
        self.user = None;
        self.token = None;
    }
}
