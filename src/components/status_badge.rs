//! Booking status badge.

use leptos::prelude::*;

use crate::net::types::BookingStatus;
use crate::state::bookings::{status_class, status_label};

/// Colored pill naming a booking's lifecycle state.
#[component]
pub fn StatusBadge(status: BookingStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", status_class(status))>
            {status_label(status)}
        </span>
    }
}
