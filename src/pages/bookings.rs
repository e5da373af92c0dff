//! Bookings page: the signed-in tourist's requests, upcoming and past.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::status_badge::StatusBadge;
use crate::net::types::BookingStatus;
use crate::state::bookings::{BookingsState, partition_bookings};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::format_price;

/// Which half of the booking history is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Upcoming,
    Past,
}

/// Booking history route. Redirects anonymous visitors to the login page.
#[component]
pub fn BookingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let bookings = RwSignal::new(BookingsState {
        loading: true,
        ..BookingsState::default()
    });
    let tab = RwSignal::new(Tab::Upcoming);
    let info = RwSignal::new(String::new());

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
            leptos::task::spawn_local(async move {
                let items = crate::net::api::fetch_bookings(&token, &user_id).await;
                bookings.update(|s| {
                    s.loading = false;
                    match items {
                        Some(items) => s.items = items,
                        None => s.error = Some("Failed to load your bookings".to_owned()),
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, token);
        }
    });

    let on_cancel = Callback::new(move |booking_id: String| {
        let Some(token) = session.get_untracked().token else {
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

    view! {
        <div class="bookings-page">
            <header class="bookings-page__header">
                <h1 class="bookings-page__title">"My Bookings"</h1>
            </header>

            <div class="dashboard__tabs">
                <button
                    class=move || if tab.get() == Tab::Upcoming { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Upcoming)
                >
                    "Upcoming"
                </button>
                <button
                    class=move || if tab.get() == Tab::Past { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Past)
                >
                    "Past"
                </button>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="bookings-page__error">{move || info.get()}</p>
            </Show>

            <Show
                when=move || !bookings.get().loading
                fallback=|| view! { <p class="bookings-page__loading">"Loading your bookings..."</p> }
            >
                <div class="dashboard__list">
                    {move || {
                        let (upcoming, past) = partition_bookings(&bookings.get().items);
                        let items = match tab.get() {
                            Tab::Upcoming => upcoming,
                            Tab::Past => past,
                        };
                        if items.is_empty() {
                            view! {
                                <p class="bookings-page__empty">
                                    "Nothing here yet. " <a href="/explore">"Find your next tour"</a>
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
                                    let location = booking
                                        .listing
                                        .as_ref()
                                        .map(|t| t.location())
                                        .unwrap_or_default();
                                    let cancellable = booking.status == BookingStatus::Pending;
                                    let booking_id = booking.id.clone();
                                    view! {
                                        <div class="booking-row">
                                            <div class="booking-row__info">
                                                <p class="booking-row__title">{title}</p>
                                                <p class="booking-row__date">{booking.requested_date.clone()} " · " {location}</p>
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
        </div>
    }
}
