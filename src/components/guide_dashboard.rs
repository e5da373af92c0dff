//! Guide dashboard: own listings and incoming booking requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guide's operational surface. Booking requests arrive from
//! tourists at any time, so the pending list refreshes on a background
//! interval while the dashboard is mounted.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Booking, BookingStatus, Tour};
use crate::state::bookings::guide_stats;
use crate::state::session::SessionState;
use crate::util::format::{first_name, format_price, format_rating};

/// Dashboard variant for the `Guide` role.
#[component]
pub fn GuideDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let tours = RwSignal::new(Vec::<Tour>::new());
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());

    let auth = move || {
        let state = session.get_untracked();
        match (state.user, state.token) {
            (Some(user), Some(token)) => Some((user.id, token)),
            _ => None,
        }
    };

    // Initial load once the signed-in identity is available.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = session.get();
        if state.user.is_none() || state.token.is_none() || requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some((guide_id, token)) = auth() else {
                return;
            };
            leptos::task::spawn_local(async move {
                let loaded_tours = crate::net::api::fetch_guide_tours(&token, &guide_id).await;
                let loaded_bookings = crate::net::api::fetch_bookings(&token, &guide_id).await;
                if loaded_tours.is_none() || loaded_bookings.is_none() {
                    info.set("Failed to load dashboard data".to_owned());
                }
                tours.set(loaded_tours.unwrap_or_default());
                bookings.set(loaded_bookings.unwrap_or_default());
                loading.set(false);
            });
        }
    });

    // Refresh incoming requests while the dashboard stays mounted.
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let Some((guide_id, token)) = auth() else {
                    continue;
                };
                if let Some(items) = crate::net::api::fetch_bookings(&token, &guide_id).await {
                    bookings.set(items);
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let greeting = move || {
        session
            .get()
            .user
            .and_then(|u| u.name)
            .map(|name| first_name(&name).to_owned())
            .unwrap_or_else(|| "Guide".to_owned())
    };

    let stats = move || guide_stats(&tours.get(), &bookings.get());

    let on_answer = Callback::new(move |(booking_id, status): (String, BookingStatus)| {
        let Some((_, token)) = auth() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_booking_status(&token, &booking_id, status).await {
                    Ok(updated) => bookings.update(|items| {
                        if let Some(slot) = items.iter_mut().find(|b| b.id == updated.id) {
                            *slot = updated;
                        }
                    }),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, booking_id, status);
        }
    });

    let on_toggle = Callback::new(move |tour_id: String| {
        let Some((_, token)) = auth() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::toggle_listing_active(&token, &tour_id).await {
                    Ok(()) => tours.update(|items| {
                        if let Some(tour) = items.iter_mut().find(|t| t.id == tour_id) {
                            tour.active = !tour.active;
                        }
                    }),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, tour_id);
        }
    });

    let on_delete = Callback::new(move |tour_id: String| {
        let Some((_, token)) = auth() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_listing(&token, &tour_id).await {
                    Ok(()) => tours.update(|items| items.retain(|t| t.id != tour_id)),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, tour_id);
        }
    });

    view! {
        <div class="dashboard dashboard--guide">
            <header class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Welcome back, " {greeting} "!"</h1>
                    <p class="dashboard__subtitle">"Manage your tours, bookings, and earnings."</p>
                </div>
                <a href="/dashboard/listings/new" class="btn btn--primary dashboard__new-tour">
                    "+ Create New Tour"
                </a>
            </header>

            <div class="dashboard__stats">
                <div class="stat-card">
                    <p class="stat-card__label">"Total Bookings"</p>
                    <p class="stat-card__value">{move || stats().total_bookings}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Pending"</p>
                    <p class="stat-card__value">{move || stats().pending_bookings}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Total Revenue"</p>
                    <p class="stat-card__value">{move || format_price(stats().total_revenue)}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Rating"</p>
                    <p class="stat-card__value">
                        {move || stats().rating.map_or_else(|| "—".to_owned(), format_rating)}
                    </p>
                </div>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="dashboard__error">{move || info.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard__loading">"Loading dashboard..."</p> }
            >
                <section class="dashboard__section">
                    <h2 class="dashboard__section-title">"Booking Requests"</h2>
                    <div class="dashboard__list">
                        {move || {
                            let items = bookings.get();
                            if items.is_empty() {
                                view! { <p class="dashboard__empty">"No booking requests yet."</p> }.into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|booking| {
                                        let tourist_name = booking
                                            .tourist
                                            .as_ref()
                                            .and_then(|t| t.name.clone())
                                            .unwrap_or_else(|| "A traveler".to_owned());
                                        let tour_title = booking
                                            .listing
                                            .as_ref()
                                            .map(|t| t.title.clone())
                                            .unwrap_or_else(|| booking.listing_id.clone());
                                        let pending = booking.status == BookingStatus::Pending;
                                        let confirm_id = booking.id.clone();
                                        let decline_id = booking.id.clone();
                                        view! {
                                            <div class="booking-row">
                                                <div class="booking-row__info">
                                                    <p class="booking-row__title">{tourist_name} " · " {tour_title}</p>
                                                    <p class="booking-row__date">{booking.requested_date.clone()}</p>
                                                </div>
                                                <span class="booking-row__price">{format_price(booking.total_price)}</span>
                                                <StatusBadge status=booking.status/>
                                                <Show when=move || pending>
                                                    <div class="booking-row__actions">
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click={
                                                                let confirm_id = confirm_id.clone();
                                                                move |_| on_answer.run((confirm_id.clone(), BookingStatus::Confirmed))
                                                            }
                                                        >
                                                            "Confirm"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click={
                                                                let decline_id = decline_id.clone();
                                                                move |_| on_answer.run((decline_id.clone(), BookingStatus::Cancelled))
                                                            }
                                                        >
                                                            "Decline"
                                                        </button>
                                                    </div>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </section>

                <section class="dashboard__section">
                    <h2 class="dashboard__section-title">"My Tours"</h2>
                    <div class="dashboard__list">
                        {move || {
                            let items = tours.get();
                            if items.is_empty() {
                                view! {
                                    <p class="dashboard__empty">
                                        "No tours yet. " <a href="/dashboard/listings/new">"Create your first listing."</a>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|tour| {
                                        let edit_href = format!("/dashboard/listings/{}/edit", tour.id);
                                        let active = tour.active;
                                        let toggle_id = tour.id.clone();
                                        let delete_id = tour.id.clone();
                                        view! {
                                            <div class="listing-row">
                                                <div class="listing-row__info">
                                                    <p class="listing-row__title">{tour.title.clone()}</p>
                                                    <p class="listing-row__location">{tour.location()}</p>
                                                </div>
                                                <span class="listing-row__price">{format_price(tour.tour_fee)}</span>
                                                <span class=if active {
                                                    "listing-row__state listing-row__state--active"
                                                } else {
                                                    "listing-row__state"
                                                }>
                                                    {if active { "Active" } else { "Paused" }}
                                                </span>
                                                <div class="listing-row__actions">
                                                    <button
                                                        class="btn"
                                                        on:click={
                                                            let toggle_id = toggle_id.clone();
                                                            move |_| on_toggle.run(toggle_id.clone())
                                                        }
                                                    >
                                                        {if active { "Deactivate" } else { "Activate" }}
                                                    </button>
                                                    <a href=edit_href class="btn">
                                                        "Edit"
                                                    </a>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click={
                                                            let delete_id = delete_id.clone();
                                                            move |_| on_delete.run(delete_id.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </section>
            </Show>
        </div>
    }
}
