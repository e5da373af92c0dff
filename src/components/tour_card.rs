//! Catalog card for a single tour listing.

use leptos::prelude::*;

use crate::net::types::Tour;
use crate::util::format::{format_price, format_rating};

/// Card shown in the explore grid, featured strips, and the wishlist.
///
/// When `on_remove` is provided (wishlist context) a remove control is
/// rendered and invoked with the tour id.
#[component]
pub fn TourCard(tour: Tour, #[prop(optional, into)] on_remove: Option<Callback<String>>) -> impl IntoView {
    let detail_href = format!("/tours/{}", tour.id);
    let image = tour.images.first().cloned().unwrap_or_default();
    let has_image = !image.is_empty();
    let alt = tour.title.clone();
    let title = tour.title.clone();
    let category = tour.category.clone();
    let location = tour.location();
    let rating = tour.rating;
    let reviews = tour.total_reviews.unwrap_or(0);
    let fee = tour.tour_fee;
    let duration = tour.duration_days;
    let tour_id = tour.id.clone();

    view! {
        <article class="tour-card">
            <a href=detail_href.clone() class="tour-card__media">
                <Show when=move || has_image>
                    <img class="tour-card__image" src=image.clone() alt=alt.clone()/>
                </Show>
                <span class="tour-card__category">{category}</span>
            </a>
            <div class="tour-card__body">
                <a href=detail_href class="tour-card__title">
                    {title}
                </a>
                <p class="tour-card__location">{location}</p>
                <div class="tour-card__meta">
                    <Show when=move || rating.is_some()>
                        <span class="tour-card__rating">
                            "★ "
                            {format_rating(rating.unwrap_or_default())}
                            " ("
                            {reviews}
                            ")"
                        </span>
                    </Show>
                    <span class="tour-card__duration">
                        {duration}
                        {move || if duration == 1 { " day" } else { " days" }}
                    </span>
                </div>
                <div class="tour-card__footer">
                    <span class="tour-card__price">
                        {format_price(fee)}
                        <span class="tour-card__price-unit">" / person"</span>
                    </span>
                    {on_remove.map(|on_remove| {
                        view! {
                            <button
                                class="btn tour-card__remove"
                                on:click=move |_| on_remove.run(tour_id.clone())
                            >
                                "Remove"
                            </button>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}
