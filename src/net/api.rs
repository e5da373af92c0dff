//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth operations return the typed [`AuthError`] taxonomy; data fetches
//! that only feed UI degradation return `Option`; mutating commands return
//! `Result<_, String>` with the server's `{ message }` when it sent one.
//! HTTP status + body handling lives in pure functions so the policy is
//! testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::types::{AuthSession, Booking, BookingRequest, BookingStatus, ListingDraft, Review, Role, Tour, User, WishlistItem};

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";

#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed";

#[cfg(any(test, feature = "hydrate"))]
const GOOGLE_FALLBACK_MESSAGE: &str = "Google sign-in failed";

/// Successful responses arrive as `{ "data": ... }`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Failure responses arrive as `{ "message": ... }`, message optional.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(id: &str) -> String {
    format!("/api/listings/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_reviews_endpoint(id: &str) -> String {
    format!("/api/listings/{id}/reviews")
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_toggle_endpoint(id: &str) -> String {
    format!("/api/listings/{id}/toggle")
}

#[cfg(any(test, feature = "hydrate"))]
fn guide_listings_endpoint(guide_id: &str) -> String {
    format!("/api/listings/guide/{guide_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_bookings_endpoint(user_id: &str) -> String {
    format!("/api/bookings/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_status_endpoint(id: &str) -> String {
    format!("/api/bookings/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_ban_endpoint(id: &str) -> String {
    format!("/api/users/{id}/ban")
}

#[cfg(any(test, feature = "hydrate"))]
fn wishlist_entry_endpoint(id: &str) -> String {
    format!("/api/wishlist/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn command_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Extract the server-provided `message`, if the body carries one.
#[cfg(any(test, feature = "hydrate"))]
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message)
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_auth_success(body: &str) -> Result<AuthSession, AuthError> {
    serde_json::from_str::<DataEnvelope<AuthSession>>(body)
        .map(|env| env.data)
        .map_err(|e| AuthError::Network(format!("malformed auth response: {e}")))
}

/// Turn a login response into a session or an `InvalidCredentials` failure
/// carrying the server's message verbatim when present.
#[cfg(any(test, feature = "hydrate"))]
fn parse_login_response(ok: bool, body: &str) -> Result<AuthSession, AuthError> {
    if ok {
        parse_auth_success(body)
    } else {
        Err(AuthError::InvalidCredentials(
            server_message(body).unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_owned()),
        ))
    }
}

/// Same policy as login, with the `RegistrationFailed` condition.
#[cfg(any(test, feature = "hydrate"))]
fn parse_register_response(ok: bool, body: &str) -> Result<AuthSession, AuthError> {
    if ok {
        parse_auth_success(body)
    } else {
        Err(AuthError::RegistrationFailed(
            server_message(body).unwrap_or_else(|| REGISTER_FALLBACK_MESSAGE.to_owned()),
        ))
    }
}

/// Google ID-token verification uses the login failure condition.
#[cfg(any(test, feature = "hydrate"))]
fn parse_google_response(ok: bool, body: &str) -> Result<AuthSession, AuthError> {
    if ok {
        parse_auth_success(body)
    } else {
        Err(AuthError::InvalidCredentials(
            server_message(body).unwrap_or_else(|| GOOGLE_FALLBACK_MESSAGE.to_owned()),
        ))
    }
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// `InvalidCredentials` when the server rejects the pair, `Network` when the
/// request cannot complete or the response is malformed.
pub async fn login(email: &str, password: &str) -> Result<AuthSession, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        parse_login_response(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register` and return the issued
/// session (registration logs the new account in).
///
/// # Errors
///
/// `RegistrationFailed` when the server rejects the request (e.g. duplicate
/// email), `Network` otherwise.
pub async fn register(name: &str, email: &str, password: &str, role: Role) -> Result<AuthSession, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
        });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        parse_register_response(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password, role);
        Err(AuthError::Unavailable)
    }
}

/// Verify a Google Identity Services ID token via `POST /api/auth/google`.
///
/// The widget interaction and token issuance happen outside this crate; this
/// call only asks the backend to validate the token and mint a session. The
/// caller commits the returned identity to the session store.
///
/// # Errors
///
/// `InvalidCredentials` when the backend rejects the token, `Network`
/// otherwise.
pub async fn verify_google_id_token(id_token: &str) -> Result<AuthSession, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "id_token": id_token });
        let resp = gloo_net::http::Request::post("/api/auth/google")
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        parse_google_response(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_token;
        Err(AuthError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_enveloped<T: serde::de::DeserializeOwned>(url: &str, token: Option<&str>) -> Option<T> {
    let mut req = gloo_net::http::Request::get(url);
    if let Some(token) = token {
        req = req.header("Authorization", &bearer(token));
    }
    let resp = req.send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<DataEnvelope<T>>().await.ok().map(|env| env.data)
}

#[cfg(feature = "hydrate")]
async fn read_command_response<T: serde::de::DeserializeOwned>(
    action: &str,
    resp: gloo_net::http::Response,
) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(server_message(&body).unwrap_or_else(|| command_failed_message(action, status)));
    }
    resp.json::<DataEnvelope<T>>()
        .await
        .map(|env| env.data)
        .map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn check_command_response(action: &str, resp: gloo_net::http::Response) -> Result<(), String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(server_message(&body).unwrap_or_else(|| command_failed_message(action, status)));
    }
    Ok(())
}

/// Fetch the public tour catalog from `GET /api/listings`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_tours() -> Option<Vec<Tour>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/listings", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a single tour from `GET /api/listings/{id}`.
pub async fn fetch_tour(id: &str) -> Option<Tour> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&listing_endpoint(id), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Fetch a tour's reviews from `GET /api/listings/{id}/reviews`.
pub async fn fetch_tour_reviews(id: &str) -> Option<Vec<Review>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&listing_reviews_endpoint(id), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Fetch a guide's own listings (active and inactive) from
/// `GET /api/listings/guide/{guide_id}`.
pub async fn fetch_guide_tours(token: &str, guide_id: &str) -> Option<Vec<Tour>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&guide_listings_endpoint(guide_id), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, guide_id);
        None
    }
}

/// Create a listing via `POST /api/listings`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn create_listing(token: &str, draft: &ListingDraft) -> Result<Tour, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/listings")
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_command_response("create listing", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err("not available on server".to_owned())
    }
}

/// Replace a listing's editable fields via `PUT /api/listings/{id}`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn update_listing(token: &str, id: &str, draft: &ListingDraft) -> Result<Tour, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&listing_endpoint(id))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_command_response("update listing", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, draft);
        Err("not available on server".to_owned())
    }
}

/// Flip a listing's accepting-bookings flag via
/// `PATCH /api/listings/{id}/toggle`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn toggle_listing_active(token: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&listing_toggle_endpoint(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check_command_response("toggle listing", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Remove a listing via `DELETE /api/listings/{id}`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn delete_listing(token: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&listing_endpoint(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check_command_response("delete listing", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the bookings visible to `user_id` from `GET /api/bookings/{user_id}`.
/// The backend scopes the result by the caller's role (tourist: own requests,
/// guide: requests against own listings).
pub async fn fetch_bookings(token: &str, user_id: &str) -> Option<Vec<Booking>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped(&user_bookings_endpoint(user_id), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        None
    }
}

/// Fetch every booking on the platform from `GET /api/bookings` (admin only).
pub async fn fetch_all_bookings(token: &str) -> Option<Vec<Booking>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/bookings", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Request a booking via `POST /api/bookings`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn create_booking(token: &str, request: &BookingRequest) -> Result<Booking, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/bookings")
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_command_response("create booking", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err("not available on server".to_owned())
    }
}

/// Move a booking to `status` via `PATCH /api/bookings/{id}/status`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn update_booking_status(token: &str, id: &str, status: BookingStatus) -> Result<Booking, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        let resp = gloo_net::http::Request::patch(&booking_status_endpoint(id))
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_command_response("update booking", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch every account from `GET /api/users` (admin only).
pub async fn fetch_all_users(token: &str) -> Option<Vec<User>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/users", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Suspend an account via `PATCH /api/users/{id}/ban` (admin only).
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn ban_user(token: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&user_ban_endpoint(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check_command_response("ban user", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's wishlist from `GET /api/wishlist`.
pub async fn fetch_wishlist(token: &str) -> Option<Vec<WishlistItem>> {
    #[cfg(feature = "hydrate")]
    {
        get_enveloped("/api/wishlist", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Save a tour to the caller's wishlist via `POST /api/wishlist`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn add_to_wishlist(token: &str, tour_id: &str) -> Result<WishlistItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "tourId": tour_id });
        let resp = gloo_net::http::Request::post("/api/wishlist")
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_command_response("add to wishlist", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, tour_id);
        Err("not available on server".to_owned())
    }
}

/// Drop a wishlist entry via `DELETE /api/wishlist/{id}`.
///
/// # Errors
///
/// Returns the server's message, or a generic status string, on failure.
pub async fn remove_from_wishlist(token: &str, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&wishlist_entry_endpoint(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check_command_response("remove from wishlist", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}
