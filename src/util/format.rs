//! Display formatting helpers shared across cards and dashboards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Review;

/// Format a USD amount: whole dollars without decimals, cents with two.
pub fn format_price(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

/// One-decimal rating display, e.g. `4.8`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Mean of the review ratings, or `None` for an empty list.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| r.rating).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(total) / reviews.len() as f64;
    Some(mean)
}

/// First word of a display name, for greeting headlines.
pub fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}
