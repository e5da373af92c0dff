//! Catalog search state and the pure filter/sort pipeline behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The explore page holds the full catalog in memory and narrows it
//! client-side; filtering is a single pass and cheap at marketplace scale.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use crate::net::types::Tour;

/// Upper bound of the price slider; also the default filter ceiling.
pub const PRICE_CEILING: f64 = 200.0;

/// Catalog sort orders offered by the explore page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Featured listings first, otherwise catalog order.
    #[default]
    Recommended,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Best average rating first.
    Rating,
}

/// Explore page state: the loaded catalog plus the active filters.
#[derive(Clone, Debug, PartialEq)]
pub struct ExploreState {
    pub tours: Vec<Tour>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub category: Option<String>,
    pub price_min: f64,
    pub price_max: f64,
    pub sort: SortOrder,
}

impl Default for ExploreState {
    fn default() -> Self {
        Self {
            tours: Vec::new(),
            loading: true,
            error: None,
            query: String::new(),
            category: None,
            price_min: 0.0,
            price_max: PRICE_CEILING,
            sort: SortOrder::Recommended,
        }
    }
}

impl ExploreState {
    /// Number of filters away from their defaults, shown on the filter button.
    pub fn active_filter_count(&self) -> usize {
        let price_moved = self.price_min > 0.0 || self.price_max < PRICE_CEILING;
        [!self.query.is_empty(), self.category.is_some(), price_moved]
            .into_iter()
            .filter(|active| *active)
            .count()
    }

    /// Reset every filter to its default, keeping the loaded catalog.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.category = None;
        self.price_min = 0.0;
        self.price_max = PRICE_CEILING;
        self.sort = SortOrder::Recommended;
    }

    /// The catalog narrowed by the active filters, in the active sort order.
    pub fn visible_tours(&self) -> Vec<Tour> {
        let mut tours = filter_tours(&self.tours, &self.query, self.category.as_deref(), self.price_min, self.price_max);
        sort_tours(&mut tours, self.sort);
        tours
    }
}

/// Narrow `tours` by search text (title/location/description,
/// case-insensitive), category, and inclusive price range.
pub fn filter_tours(tours: &[Tour], query: &str, category: Option<&str>, price_min: f64, price_max: f64) -> Vec<Tour> {
    let needle = query.trim().to_lowercase();
    tours
        .iter()
        .filter(|tour| {
            if !needle.is_empty() {
                let haystack = format!(
                    "{} {} {}",
                    tour.title.to_lowercase(),
                    tour.location().to_lowercase(),
                    tour.description.to_lowercase()
                );
                if !haystack.contains(&needle) {
                    return false;
                }
            }
            if let Some(category) = category {
                if tour.category != category {
                    return false;
                }
            }
            tour.tour_fee >= price_min && tour.tour_fee <= price_max
        })
        .cloned()
        .collect()
}

/// Order `tours` in place by the requested sort. All orders are stable, so
/// ties keep their catalog order.
pub fn sort_tours(tours: &mut [Tour], sort: SortOrder) {
    match sort {
        SortOrder::Recommended => tours.sort_by_key(|t| !t.featured),
        SortOrder::PriceLow => tours.sort_by(|a, b| a.tour_fee.total_cmp(&b.tour_fee)),
        SortOrder::PriceHigh => tours.sort_by(|a, b| b.tour_fee.total_cmp(&a.tour_fee)),
        SortOrder::Rating => tours.sort_by(|a, b| {
            let a_rating = a.rating.unwrap_or(0.0);
            let b_rating = b.rating.unwrap_or(0.0);
            b_rating.total_cmp(&a_rating)
        }),
    }
}
