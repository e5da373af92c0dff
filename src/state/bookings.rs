//! Booking list shaping: partitions, labels, and dashboard stats.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use crate::net::types::{Booking, BookingStatus, Tour};

/// Bookings visible to the current user, loaded per screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingsState {
    pub items: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
}

/// A booking still ahead of the traveler (requested or held).
pub fn is_upcoming(status: BookingStatus) -> bool {
    matches!(status, BookingStatus::Pending | BookingStatus::Confirmed)
}

/// Split bookings into (upcoming, past) preserving order.
pub fn partition_bookings(bookings: &[Booking]) -> (Vec<Booking>, Vec<Booking>) {
    bookings.iter().cloned().partition(|b| is_upcoming(b.status))
}

/// Badge text for a booking status.
pub fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "Pending",
        BookingStatus::Confirmed => "Confirmed",
        BookingStatus::Completed => "Completed",
        BookingStatus::Cancelled => "Cancelled",
    }
}

/// BEM modifier for a booking status badge.
pub fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "status-badge--pending",
        BookingStatus::Confirmed => "status-badge--confirmed",
        BookingStatus::Completed => "status-badge--completed",
        BookingStatus::Cancelled => "status-badge--cancelled",
    }
}

/// Headline numbers for the guide dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuideStats {
    pub total_bookings: usize,
    pub pending_bookings: usize,
    /// Sum of completed bookings' totals, in USD.
    pub total_revenue: f64,
    pub active_tours: usize,
    /// Mean of the listings' average ratings, when any listing has one.
    pub rating: Option<f64>,
}

/// Compute guide dashboard stats from the guide's listings and the bookings
/// against them. Single pass over each input.
pub fn guide_stats(tours: &[Tour], bookings: &[Booking]) -> GuideStats {
    let mut stats = GuideStats {
        total_bookings: bookings.len(),
        ..GuideStats::default()
    };
    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => stats.pending_bookings += 1,
            BookingStatus::Completed => stats.total_revenue += booking.total_price,
            BookingStatus::Confirmed | BookingStatus::Cancelled => {}
        }
    }
    stats.active_tours = tours.iter().filter(|t| t.active).count();

    let rated: Vec<f64> = tours.iter().filter_map(|t| t.rating).collect();
    if !rated.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let mean = rated.iter().sum::<f64>() / rated.len() as f64;
        stats.rating = Some(mean);
    }
    stats
}
