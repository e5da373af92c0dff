//! Landing page: hero search, featured tours, category shortcuts.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::tour_card::TourCard;
use crate::net::types::Tour;

/// Categories surfaced as home-page shortcuts.
const CATEGORIES: [&str; 6] = ["Food", "History", "Nature", "Culture", "Nightlife", "Adventure"];

/// How many featured listings the strip shows.
const FEATURED_LIMIT: usize = 6;

/// Pick the featured slice of the catalog, capped at [`FEATURED_LIMIT`].
fn featured_tours(tours: &[Tour]) -> Vec<Tour> {
    tours.iter().filter(|t| t.featured && t.active).take(FEATURED_LIMIT).cloned().collect()
}

/// Explore link carrying a search query.
fn explore_search_href(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        "/explore".to_owned()
    } else {
        format!("/explore?q={query}")
    }
}

/// Explore link carrying a category filter.
fn explore_category_href(category: &str) -> String {
    format!("/explore?category={category}")
}

/// Marketing landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    let search = RwSignal::new(String::new());
    let featured = RwSignal::new(Vec::<Tour>::new());
    let loading = RwSignal::new(true);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(tours) = crate::net::api::fetch_tours().await {
                featured.set(featured_tours(&tours));
            }
            loading.set(false);
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&explore_search_href(&search.get()), Default::default());
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Explore the world with a local guide"</h1>
                <p class="hero__subtitle">"Book unique tours led by the people who know their city best."</p>
                <form class="hero__search" on:submit=on_search>
                    <input
                        class="hero__search-input"
                        type="search"
                        placeholder="Search tours, destinations, guides..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary hero__search-button" type="submit">
                        "Search"
                    </button>
                </form>
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"Featured tours"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="home-section__loading">"Loading tours..."</p> }
                >
                    <div class="home-section__cards">
                        {move || {
                            let tours = featured.get();
                            if tours.is_empty() {
                                view! {
                                    <p class="home-section__empty">
                                        "Nothing featured right now — " <a href="/explore">"browse the full catalog"</a> "."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                tours
                                    .into_iter()
                                    .map(|tour| view! { <TourCard tour=tour/> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </Show>
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"Browse by category"</h2>
                <div class="home-section__categories">
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <a href=explore_category_href(category) class="category-chip">
                                    {category}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home-section home-section--how">
                <h2 class="home-section__title">"How it works"</h2>
                <ol class="how-it-works">
                    <li>"Find a tour that fits your trip."</li>
                    <li>"Request a date and group size."</li>
                    <li>"Your guide confirms, and you're set."</li>
                </ol>
            </section>
        </div>
    }
}
