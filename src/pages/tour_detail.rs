//! Tour detail page: listing info, reviews, and the booking request form.

#[cfg(test)]
#[path = "tour_detail_test.rs"]
mod tour_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{BookingRequest, Review, Tour};
use crate::state::session::SessionState;
use crate::util::format::{average_rating, format_price, format_rating};

/// Quoted total for a booking request.
fn booking_total(fee: f64, group_size: u32) -> f64 {
    fee * f64::from(group_size)
}

/// Validate the booking form before hitting the network.
fn validate_booking_input(date: &str, group_raw: &str, max_group: u32) -> Result<(String, u32), String> {
    let date = date.trim();
    if date.is_empty() {
        return Err("Pick a date for your tour.".to_owned());
    }
    let group_size = group_raw.trim().parse::<u32>().unwrap_or(0);
    if group_size < 1 || group_size > max_group {
        return Err(format!("Group size must be between 1 and {max_group}."));
    }
    Ok((date.to_owned(), group_size))
}

/// The rating shown in the header: the server aggregate when present,
/// otherwise computed from the loaded reviews.
fn display_rating(tour: &Tour, reviews: &[Review]) -> Option<f64> {
    tour.rating.or_else(|| average_rating(reviews))
}

/// Single listing screen.
#[component]
pub fn TourDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let tour = RwSignal::new(None::<Tour>);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);

    let date = RwSignal::new(String::new());
    let group = RwSignal::new("1".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let review_id = id.clone();
            leptos::task::spawn_local(async move {
                tour.set(crate::net::api::fetch_tour(&id).await);
                loading.set(false);
            });
            leptos::task::spawn_local(async move {
                if let Some(items) = crate::net::api::fetch_tour_reviews(&review_id).await {
                    reviews.set(items);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = tour.get() else {
            return;
        };
        let state = session.get_untracked();
        let Some(token) = state.token else {
            info.set("Log in to request a booking.".to_owned());
            return;
        };
        let (date_value, group_size) = match validate_booking_input(&date.get(), &group.get(), current.max_group_size) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg);
                return;
            }
        };
        busy.set(true);
        info.set("Sending your request...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let request = BookingRequest {
                listing_id: current.id.clone(),
                requested_date: date_value,
                group_size,
                total_price: booking_total(current.tour_fee, group_size),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_booking(&token, &request).await {
                    Ok(_) => info.set("Request sent! Your guide will confirm shortly.".to_owned()),
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, date_value, group_size, current);
        }
    };

    view! {
        <div class="tour-detail">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="tour-detail__loading">"Loading tour..."</p> }
            >
                {move || {
                    let Some(current) = tour.get() else {
                        return view! {
                            <p class="tour-detail__missing">
                                "This tour is no longer available. " <a href="/explore">"Browse other tours"</a>
                            </p>
                        }
                            .into_any();
                    };
                    let rating = display_rating(&current, &reviews.get());
                    let hero = current.images.first().cloned().unwrap_or_default();
                    let has_hero = !hero.is_empty();
                    let title = current.title.clone();
                    let alt = current.title.clone();
                    let location = current.location();
                    let description = current.description.clone();
                    let language = current.language.clone();
                    let category = current.category.clone();
                    let meeting_point = current.meeting_point.clone();
                    let itinerary = current.itinerary.clone();
                    let has_itinerary = !itinerary.is_empty();
                    let fee = current.tour_fee;
                    let duration = current.duration_days;
                    let max_group = current.max_group_size;
                    let accepting = current.active;

                    view! {
                        <article class="tour-detail__body">
                            <Show when=move || has_hero>
                                <img class="tour-detail__hero" src=hero.clone() alt=alt.clone()/>
                            </Show>

                            <header class="tour-detail__header">
                                <h1 class="tour-detail__title">{title}</h1>
                                <p class="tour-detail__location">{location}</p>
                                <div class="tour-detail__meta">
                                    {rating
                                        .map(|value| {
                                            view! {
                                                <span class="tour-detail__rating">"★ " {format_rating(value)}</span>
                                            }
                                        })}
                                    <span class="tour-detail__chip">{category}</span>
                                    <span class="tour-detail__chip">{language}</span>
                                    <span class="tour-detail__chip">
                                        {duration}
                                        {if duration == 1 { " day" } else { " days" }}
                                    </span>
                                </div>
                            </header>

                            <section class="tour-detail__section">
                                <h2>"About this tour"</h2>
                                <p>{description}</p>
                                {meeting_point
                                    .map(|point| {
                                        view! {
                                            <p class="tour-detail__meeting">"Meeting point: " {point}</p>
                                        }
                                    })}
                            </section>

                            <Show when=move || has_itinerary>
                                <section class="tour-detail__section">
                                    <h2>"Itinerary"</h2>
                                    <ol class="tour-detail__itinerary">
                                        {itinerary
                                            .clone()
                                            .into_iter()
                                            .map(|line| view! { <li>{line}</li> })
                                            .collect_view()}
                                    </ol>
                                </section>
                            </Show>

                            <section class="tour-detail__section tour-detail__booking">
                                <h2>"Request a booking"</h2>
                                <p class="tour-detail__price">
                                    {format_price(fee)}
                                    <span class="tour-detail__price-unit">" / person"</span>
                                </p>
                                <Show
                                    when=move || session.get().is_authenticated()
                                    fallback=|| {
                                        view! {
                                            <p class="tour-detail__login-prompt">
                                                <a href="/login">"Log in"</a> " to request a booking."
                                            </p>
                                        }
                                    }
                                >
                                    <Show
                                        when=move || accepting
                                        fallback=|| {
                                            view! {
                                                <p class="tour-detail__paused">"This guide is not taking bookings right now."</p>
                                            }
                                        }
                                    >
                                        <form class="booking-form" on:submit=on_book>
                                            <label class="booking-form__label">
                                                "Date"
                                                <input
                                                    class="booking-form__input"
                                                    type="date"
                                                    prop:value=move || date.get()
                                                    on:input=move |ev| date.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <label class="booking-form__label">
                                                "Group size (max " {max_group} ")"
                                                <input
                                                    class="booking-form__input"
                                                    type="number"
                                                    min="1"
                                                    max=max_group.to_string()
                                                    prop:value=move || group.get()
                                                    on:input=move |ev| group.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <p class="booking-form__total">
                                                "Total: "
                                                {move || {
                                                    let size = group.get().trim().parse::<u32>().unwrap_or(1);
                                                    format_price(booking_total(fee, size))
                                                }}
                                            </p>
                                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                                {move || if busy.get() { "Sending..." } else { "Request Booking" }}
                                            </button>
                                        </form>
                                    </Show>
                                </Show>
                                <Show when=move || !info.get().is_empty()>
                                    <p class="booking-form__message">{move || info.get()}</p>
                                </Show>
                            </section>

                            <section class="tour-detail__section">
                                <h2>"Reviews"</h2>
                                {move || {
                                    let items = reviews.get();
                                    if items.is_empty() {
                                        view! { <p class="tour-detail__no-reviews">"No reviews yet."</p> }.into_any()
                                    } else {
                                        items
                                            .into_iter()
                                            .map(|review| {
                                                let author = review
                                                    .tourist
                                                    .as_ref()
                                                    .and_then(|t| t.name.clone())
                                                    .unwrap_or_else(|| "A traveler".to_owned());
                                                let stars = "★".repeat(review.rating.min(5) as usize);
                                                view! {
                                                    <div class="review">
                                                        <p class="review__header">
                                                            <span class="review__author">{author}</span>
                                                            <span class="review__stars">{stars}</span>
                                                        </p>
                                                        {review.comment.clone().map(|comment| view! { <p class="review__comment">{comment}</p> })}
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                }}
                            </section>
                        </article>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
