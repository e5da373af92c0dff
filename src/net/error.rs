//! Auth operation failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures are surfaced to the calling form handler, which owns the
//! user-visible presentation. Nothing here retries or recovers locally.
//! Server-provided `{ message }` strings are carried verbatim so forms can
//! show exactly what the backend said.

use thiserror::Error;

/// Why an auth operation failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The auth API rejected the credentials.
    #[error("{0}")]
    InvalidCredentials(String),
    /// The auth API rejected the new-account request (duplicate email,
    /// validation failure, ...).
    #[error("{0}")]
    RegistrationFailed(String),
    /// The request could not complete at the transport level, or the
    /// response body was not the expected shape.
    #[error("network error: {0}")]
    Network(String),
    /// Auth calls only exist in the browser build; SSR paths land here.
    #[error("authentication is only available in the browser")]
    Unavailable,
}

impl AuthError {
    /// Message suitable for direct display in a form.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
