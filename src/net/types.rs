//! Shared wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend's JSON payloads (camelCase
//! field names, `{ data: ... }` envelopes handled in `api`) so serde
//! round-trips stay lossless and screens can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Closed set of account roles controlling which dashboard is shown.
///
/// Unknown wire values deserialize to [`Role::Tourist`] — the backend may
/// grow roles ahead of this client, and the tourist view is the safe default
/// branch rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Tour operator: owns listings, answers booking requests.
    Guide,
    /// Platform moderator over all users, tours, and bookings.
    Admin,
    /// Traveler: books tours, keeps a wishlist.
    #[default]
    #[serde(other)]
    Tourist,
}

/// Lifecycle of a booking request, driven by the guide (confirm) and either
/// party (cancel).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Requested by a tourist, awaiting the guide's answer.
    #[default]
    Pending,
    /// Accepted by the guide; the tour date is held.
    Confirmed,
    /// The tour date has passed and the booking was honored.
    Completed,
    /// Withdrawn or rejected before completion.
    Cancelled,
}

/// An account as returned by the auth and user endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name, if the account has one.
    pub name: Option<String>,
    /// Contact email, if exposed by the endpoint.
    pub email: Option<String>,
    /// Account role; absent on some profile payloads.
    #[serde(default)]
    pub role: Role,
    /// OAuth provider avatar, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Uploaded profile picture, preferred over `image` when present.
    #[serde(default)]
    pub profile_pic: Option<String>,
    /// Free-form biography shown on profiles.
    #[serde(default)]
    pub bio: Option<String>,
    /// Languages spoken, for all roles.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Areas of expertise; only meaningful for guides.
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Day rate in USD; only meaningful for guides.
    #[serde(default)]
    pub daily_rate: Option<f64>,
    /// ISO 8601 creation timestamp, if exposed.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A tour listing (the backend calls these "listings"; the UI says "tour").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    /// Unique listing identifier.
    pub id: String,
    /// Owning guide's user id.
    pub guide_id: String,
    /// Owning guide record, when the endpoint embeds it.
    #[serde(default)]
    pub guide: Option<User>,
    /// Listing title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Day-by-day itinerary lines.
    #[serde(default)]
    pub itinerary: Vec<String>,
    /// Price per person in USD.
    pub tour_fee: f64,
    /// Tour length in days.
    pub duration_days: u32,
    /// Where the group meets, if fixed.
    #[serde(default)]
    pub meeting_point: Option<String>,
    /// Maximum party size accepted per booking.
    pub max_group_size: u32,
    /// City the tour runs in.
    pub city: String,
    /// Country, when the listing carries one.
    #[serde(default)]
    pub country: Option<String>,
    /// Language the tour is conducted in.
    pub language: String,
    /// Marketplace category (e.g. `"Food"`, `"History"`).
    pub category: String,
    /// Image URLs, first one is the card/hero shot.
    #[serde(default)]
    pub images: Vec<String>,
    /// Review count, when the endpoint aggregates it.
    #[serde(default)]
    pub total_reviews: Option<u32>,
    // The listings API emits both spellings depending on endpoint.
    /// Average review rating, when aggregated server-side.
    #[serde(default, alias = "avgRating")]
    pub rating: Option<f64>,
    /// Whether the listing is surfaced in home-page featured strips.
    #[serde(default)]
    pub featured: bool,
    /// Whether the guide currently accepts bookings for this listing.
    #[serde(default = "default_active", alias = "isActive")]
    pub active: bool,
    /// ISO 8601 creation timestamp, if exposed.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Tour {
    /// Human-readable location: `"City, Country"` or just the city.
    pub fn location(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {country}", self.city),
            _ => self.city.clone(),
        }
    }
}

/// A booking request connecting a tourist, a listing, and its guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: String,
    /// Booked listing id.
    pub listing_id: String,
    /// Booked listing record, when embedded.
    #[serde(default)]
    pub listing: Option<Tour>,
    /// Requesting tourist's user id.
    pub tourist_id: String,
    /// Requesting tourist record, when embedded.
    #[serde(default)]
    pub tourist: Option<User>,
    /// Listing owner's user id.
    pub guide_id: String,
    /// Requested tour date (ISO 8601 date string).
    pub requested_date: String,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: BookingStatus,
    /// Party size for this request.
    #[serde(default)]
    pub group_size: Option<u32>,
    /// Total price in USD (fee × party size at request time).
    pub total_price: f64,
    /// ISO 8601 creation timestamp, if exposed.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A tourist's review of a completed tour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: String,
    /// Reviewed listing id.
    pub listing_id: String,
    /// Reviewing tourist's user id.
    pub tourist_id: String,
    /// Reviewing tourist record, when embedded.
    #[serde(default)]
    pub tourist: Option<User>,
    /// Star rating, 1–5.
    pub rating: u32,
    /// Free-form comment, if left.
    #[serde(default)]
    pub comment: Option<String>,
    /// ISO 8601 creation timestamp, if exposed.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A saved tour on a tourist's wishlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Unique wishlist entry identifier.
    pub id: String,
    /// Saved listing id.
    pub tour_id: String,
    /// Saved listing record.
    pub tour: Tour,
    /// ISO 8601 timestamp the entry was added, if exposed.
    #[serde(default)]
    pub added_at: Option<String>,
}

/// Client-composed payload for creating or replacing a listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    /// Listing title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Day-by-day itinerary lines.
    pub itinerary: Vec<String>,
    /// Price per person in USD.
    pub tour_fee: f64,
    /// Tour length in days.
    pub duration_days: u32,
    /// Where the group meets, if fixed.
    pub meeting_point: Option<String>,
    /// Maximum party size accepted per booking.
    pub max_group_size: u32,
    /// City the tour runs in.
    pub city: String,
    /// Country, optional.
    pub country: Option<String>,
    /// Language the tour is conducted in.
    pub language: String,
    /// Marketplace category.
    pub category: String,
    /// Image URLs.
    pub images: Vec<String>,
}

/// Client-composed payload for requesting a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Listing being booked.
    pub listing_id: String,
    /// Requested tour date (ISO 8601 date string).
    pub requested_date: String,
    /// Party size.
    pub group_size: u32,
    /// Quoted total (fee × party size) at request time.
    pub total_price: f64,
}

/// Identity + credential pair issued by the auth API on a successful login,
/// registration, or federated-login verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The authenticated account.
    pub user: User,
    /// Opaque bearer token attached to subsequent authorized requests.
    pub token: String,
}
