//! Explore page: the full catalog with client-side filtering and sorting.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::tour_card::TourCard;
use crate::state::explore::{ExploreState, PRICE_CEILING, SortOrder};

/// Catalog search screen.
#[component]
pub fn ExplorePage() -> impl IntoView {
    let query = use_query_map();

    let explore = RwSignal::new(ExploreState::default());

    // Seed filters from the URL (`?q=`, `?category=`) once.
    {
        let initial_query = query.with_untracked(|q| q.get("q")).unwrap_or_default();
        let initial_category = query.with_untracked(|q| q.get("category"));
        explore.update(|s| {
            s.query = initial_query;
            s.category = initial_category.filter(|c| !c.is_empty());
        });
    }

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let tours = crate::net::api::fetch_tours().await;
            explore.update(|s| {
                s.loading = false;
                match tours {
                    Some(tours) => s.tours = tours,
                    None => s.error = Some("Failed to load the tour catalog".to_owned()),
                }
            });
        });
    });

    let on_sort_change = move |ev: leptos::ev::Event| {
        let order = match event_target_value(&ev).as_str() {
            "price-low" => SortOrder::PriceLow,
            "price-high" => SortOrder::PriceHigh,
            "rating" => SortOrder::Rating,
            _ => SortOrder::Recommended,
        };
        explore.update(|s| s.sort = order);
    };

    let parse_price = |raw: String, fallback: f64| raw.parse::<f64>().unwrap_or(fallback);

    view! {
        <div class="explore-page">
            <div class="explore-page__filters">
                <input
                    class="explore-page__search"
                    type="search"
                    placeholder="Search tours, destinations, guides..."
                    prop:value=move || explore.get().query
                    on:input=move |ev| explore.update(|s| s.query = event_target_value(&ev))
                />

                <input
                    class="explore-page__category"
                    type="text"
                    placeholder="Category"
                    prop:value=move || explore.get().category.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        explore.update(|s| s.category = if value.is_empty() { None } else { Some(value) });
                    }
                />

                <label class="explore-page__price">
                    "Min $"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || explore.get().price_min.to_string()
                        on:input=move |ev| {
                            let value = parse_price(event_target_value(&ev), 0.0);
                            explore.update(|s| s.price_min = value);
                        }
                    />
                </label>
                <label class="explore-page__price">
                    "Max $"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || explore.get().price_max.to_string()
                        on:input=move |ev| {
                            let value = parse_price(event_target_value(&ev), PRICE_CEILING);
                            explore.update(|s| s.price_max = value);
                        }
                    />
                </label>

                <select class="explore-page__sort" on:change=on_sort_change>
                    <option value="recommended">"Recommended"</option>
                    <option value="price-low">"Price: low to high"</option>
                    <option value="price-high">"Price: high to low"</option>
                    <option value="rating">"Top rated"</option>
                </select>

                <button class="btn explore-page__clear" on:click=move |_| explore.update(ExploreState::clear_filters)>
                    "Clear"
                    {move || {
                        let count = explore.get().active_filter_count();
                        if count > 0 { format!(" ({count})") } else { String::new() }
                    }}
                </button>
            </div>

            <Show when=move || explore.get().error.is_some()>
                <p class="explore-page__error">{move || explore.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !explore.get().loading
                fallback=|| view! { <p class="explore-page__loading">"Loading tours..."</p> }
            >
                <div class="explore-page__results">
                    {move || {
                        let visible = explore.get().visible_tours();
                        if visible.is_empty() {
                            view! {
                                <p class="explore-page__empty">"No tours match these filters."</p>
                            }
                                .into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|tour| view! { <TourCard tour=tour/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
