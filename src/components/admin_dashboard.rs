//! Admin dashboard: cross-cutting moderation over users, tours, and bookings.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Booking, BookingStatus, Role, Tour, User};
use crate::state::session::SessionState;
use crate::util::format::format_price;

/// Which moderation tab is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Users,
    Tours,
    Bookings,
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Tourist => "Tourist",
        Role::Guide => "Guide",
        Role::Admin => "Admin",
    }
}

/// Dashboard variant for the `Admin` role.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let users = RwSignal::new(Vec::<User>::new());
    let tours = RwSignal::new(Vec::<Tour>::new());
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let tab = RwSignal::new(Tab::Users);

    let token = move || session.get_untracked().token;

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = session.get();
        if state.token.is_none() || requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = token() else {
                return;
            };
            leptos::task::spawn_local(async move {
                let loaded_users = crate::net::api::fetch_all_users(&token).await;
                let loaded_tours = crate::net::api::fetch_tours().await;
                let loaded_bookings = crate::net::api::fetch_all_bookings(&token).await;
                if loaded_users.is_none() || loaded_tours.is_none() || loaded_bookings.is_none() {
                    info.set("Failed to load moderation data".to_owned());
                }
                users.set(loaded_users.unwrap_or_default());
                tours.set(loaded_tours.unwrap_or_default());
                bookings.set(loaded_bookings.unwrap_or_default());
                loading.set(false);
            });
        }
    });

    let on_ban = Callback::new(move |user_id: String| {
        let Some(token) = token() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::ban_user(&token, &user_id).await {
                    Ok(()) => users.update(|items| items.retain(|u| u.id != user_id)),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id);
        }
    });

    let on_remove_tour = Callback::new(move |tour_id: String| {
        let Some(token) = token() else {
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

    let on_cancel_booking = Callback::new(move |booking_id: String| {
        let Some(token) = token() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_booking_status(&token, &booking_id, BookingStatus::Cancelled).await {
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
            let _ = (token, booking_id);
        }
    });

    let revenue = move || {
        bookings
            .get()
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .map(|b| b.total_price)
            .sum::<f64>()
    };

    view! {
        <div class="dashboard dashboard--admin">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"Platform Moderation"</h1>
                <p class="dashboard__subtitle">"Users, tours, and bookings across Guidely."</p>
            </header>

            <div class="dashboard__stats">
                <div class="stat-card">
                    <p class="stat-card__label">"Users"</p>
                    <p class="stat-card__value">{move || users.get().len()}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Tours"</p>
                    <p class="stat-card__value">{move || tours.get().len()}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Bookings"</p>
                    <p class="stat-card__value">{move || bookings.get().len()}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-card__label">"Completed Revenue"</p>
                    <p class="stat-card__value">{move || format_price(revenue())}</p>
                </div>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="dashboard__error">{move || info.get()}</p>
            </Show>

            <div class="dashboard__tabs">
                <button
                    class=move || if tab.get() == Tab::Users { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Users)
                >
                    "Users"
                </button>
                <button
                    class=move || if tab.get() == Tab::Tours { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Tours)
                >
                    "Tours"
                </button>
                <button
                    class=move || if tab.get() == Tab::Bookings { "tab tab--active" } else { "tab" }
                    on:click=move |_| tab.set(Tab::Bookings)
                >
                    "Bookings"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard__loading">"Loading moderation data..."</p> }
            >
                <Show when=move || tab.get() == Tab::Users>
                    <div class="dashboard__list">
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let name = user.name.clone().unwrap_or_else(|| "(unnamed)".to_owned());
                                    let email = user.email.clone().unwrap_or_default();
                                    let ban_id = user.id.clone();
                                    view! {
                                        <div class="moderation-row">
                                            <div class="moderation-row__info">
                                                <p class="moderation-row__title">{name}</p>
                                                <p class="moderation-row__detail">{email}</p>
                                            </div>
                                            <span class="moderation-row__tag">{role_label(user.role)}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click={
                                                    let ban_id = ban_id.clone();
                                                    move |_| on_ban.run(ban_id.clone())
                                                }
                                            >
                                                "Ban"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <Show when=move || tab.get() == Tab::Tours>
                    <div class="dashboard__list">
                        {move || {
                            tours
                                .get()
                                .into_iter()
                                .map(|tour| {
                                    let remove_id = tour.id.clone();
                                    view! {
                                        <div class="moderation-row">
                                            <div class="moderation-row__info">
                                                <p class="moderation-row__title">{tour.title.clone()}</p>
                                                <p class="moderation-row__detail">{tour.location()}</p>
                                            </div>
                                            <span class="moderation-row__tag">{format_price(tour.tour_fee)}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click={
                                                    let remove_id = remove_id.clone();
                                                    move |_| on_remove_tour.run(remove_id.clone())
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <Show when=move || tab.get() == Tab::Bookings>
                    <div class="dashboard__list">
                        {move || {
                            bookings
                                .get()
                                .into_iter()
                                .map(|booking| {
                                    let title = booking
                                        .listing
                                        .as_ref()
                                        .map(|t| t.title.clone())
                                        .unwrap_or_else(|| booking.listing_id.clone());
                                    let open = booking.status == BookingStatus::Pending
                                        || booking.status == BookingStatus::Confirmed;
                                    let cancel_id = booking.id.clone();
                                    view! {
                                        <div class="moderation-row">
                                            <div class="moderation-row__info">
                                                <p class="moderation-row__title">{title}</p>
                                                <p class="moderation-row__detail">{booking.requested_date.clone()}</p>
                                            </div>
                                            <span class="moderation-row__tag">{format_price(booking.total_price)}</span>
                                            <StatusBadge status=booking.status/>
                                            <Show when=move || open>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click={
                                                        let cancel_id = cancel_id.clone();
                                                        move |_| on_cancel_booking.run(cancel_id.clone())
                                                    }
                                                >
                                                    "Cancel"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
