//! Tourist dashboard: own bookings and wishlist.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::components::tour_card::TourCard;
use crate::net::types::{BookingStatus, WishlistItem};
use crate::state::bookings::{BookingsState, is_upcoming};
use crate::state::session::SessionState;
use crate::util::format::{first_name, format_price};

/// Which tab of the tourist dashboard is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Trips,
    Wishlist,
}

/// Dashboard variant for the `Tourist` role.
#[component]
pub fn TouristDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let bookings = RwSignal::new(BookingsState {
        loading: true,
        ..BookingsState::default()
    });
    let wishlist = RwSignal::new(Vec::<WishlistItem>::new());
    let tab = RwSignal::new(Tab::Trips);
    let info = RwSignal::new(String::new());

    // Load bookings and wishlist once the signed-in identity is available.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = session.get();
        let (Some(user), Some(token)) = (state.user, state.token) else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let user_id = user.id.clone();
            let bookings_token = token.clone();
            leptos::task::spawn_local(async move {
                let items = crate::net::api::fetch_bookings(&bookings_token, &user_id).await;
                bookings.update(|s| {
                    s.loading = false;
                    match items {
                        Some(items) => s.items = items,
                        None => s.error = Some("Failed to load your bookings".to_owned()),
                    }
                });
            });
            leptos::task::spawn_local(async move {
                if let Some(items) = crate::net::api::fetch_wishlist(&token).await {
                    wishlist.set(items);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, token);
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .and_then(|u| u.name)
            .map(|name| first_name(&name).to_owned())
            .unwrap_or_else(|| "Traveler".to_owned())
    };

    let upcoming_count = move || {
        bookings
            .get()
            .items
            .iter()
            .filter(|b| is_upcoming(b.status))
            .count()
    };
    let total_count = move || bookings.get().items.len();
    let wishlist_count = move || wishlist.get().len();

    let on_cancel = Callback::new(move |booking_id: String| {
        let state = session.get_untracked();
        let Some(token) = state.token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_booking_status(&token, &booking_id, BookingStatus::Cancelled).await {
                    Ok(updated) => bookings.update(|s| {
                        if let Some(slot) = s.items.iter_mut().find(|b| b.id == updated.id) {
                            *slot = updated;
                        }
                    }),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, booking_id);
        }
    });

    let on_remove_wishlist = Callback::new(move |tour_id: String| {
        let state = session.get_untracked();
        let Some(token) = state.token else {
            return;
        };
        let Some(entry_id) = wishlist
            .get_untracked()
            .iter()
            .find(|item| item.tour_id == tour_id)
            .map(|item| item.id.clone())
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::remove_from_wishlist(&token, &entry_id).await {
                    Ok(()) => wishlist.update(|items| items.retain(|item| item.id != entry_id)),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, entry_id);
        }
    });

    view! {
        <div class="dashboard dashboard--tourist">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"Welcome back, " {greeting} "!"</h1>
                <p class="dashboard__subtitle">"Your trips and saved tours in one place."</p>
            </header>

            <div class="dashboard__stats">
                <div class="stat-card">
                    <p class="stat-card__label">"Total Bookings"</p>
                    <p class="stat-card__value">{total_count}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Upcoming"</p>
                    <p class="stat-card__value">{upcoming_count}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Wishlist"</p>
                    <p class="stat-card__value">{wishlist_count}</p>
                </div>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="dashboard__error">{move || info.get()}</p>
            </Show>

            <div class="dashboard__tabs">
                <button
                    class=move || if tab.get() == Tab::Trips { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Trips)
                >
                    "My Trips"
                </button>
                <button
                    class=move || if tab.get() == Tab::Wishlist { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Wishlist)
                >
                    "Wishlist"
                </button>
            </div>

            <Show when=move || tab.get() == Tab::Trips>
                <Show
                    when=move || !bookings.get().loading
                    fallback=|| view! { <p class="dashboard__loading">"Loading your trips..."</p> }
                >
                    <div class="dashboard__list">
                        {move || {
                            let items = bookings.get().items;
                            if items.is_empty() {
                                view! {
                                    <p class="dashboard__empty">
                                        "No bookings yet. " <a href="/explore">"Find a tour"</a> " to get started."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|booking| {
                                        let title = booking
                                            .listing
                                            .as_ref()
                                            .map(|t| t.title.clone())
                                            .unwrap_or_else(|| booking.listing_id.clone());
                                        let cancellable = booking.status == BookingStatus::Pending;
                                        let booking_id = booking.id.clone();
                                        view! {
                                            <div class="booking-row">
                                                <div class="booking-row__info">
                                                    <p class="booking-row__title">{title}</p>
                                                    <p class="booking-row__date">{booking.requested_date.clone()}</p>
                                                </div>
                                                <span class="booking-row__price">{format_price(booking.total_price)}</span>
                                                <StatusBadge status=booking.status/>
                                                <Show when=move || cancellable>
                                                    <button
                                                        class="btn btn--danger booking-row__cancel"
                                                        on:click={
                                                            let booking_id = booking_id.clone();
                                                            move |_| on_cancel.run(booking_id.clone())
                                                        }
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || tab.get() == Tab::Wishlist>
                <div class="dashboard__cards">
                    {move || {
                        let items = wishlist.get();
                        if items.is_empty() {
                            view! { <p class="dashboard__empty">"Your wishlist is empty"</p> }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|item| {
                                    view! { <TourCard tour=item.tour on_remove=on_remove_wishlist/> }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
