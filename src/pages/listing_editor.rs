//! Listing editor: create and edit routes for a guide's tours.

#[cfg(test)]
#[path = "listing_editor_test.rs"]
mod listing_editor_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{ListingDraft, Role, Tour};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Raw form fields as the user typed them.
#[derive(Clone, Debug, Default, PartialEq)]
struct ListingFields {
    title: String,
    description: String,
    itinerary: String,
    fee: String,
    duration: String,
    meeting_point: String,
    max_group: String,
    city: String,
    country: String,
    language: String,
    category: String,
    images: String,
}

/// Split a textarea into trimmed, non-empty lines.
fn parse_multiline(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Turn an empty input into `None`, anything else into its trimmed value.
fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Validate the raw fields and assemble the wire payload.
fn build_listing_draft(fields: &ListingFields) -> Result<ListingDraft, &'static str> {
    let title = fields.title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    let description = fields.description.trim();
    if description.is_empty() {
        return Err("Enter a description.");
    }
    let tour_fee = fields.fee.trim().parse::<f64>().unwrap_or(0.0);
    if tour_fee <= 0.0 {
        return Err("Enter a valid price per person.");
    }
    let duration_days = fields.duration.trim().parse::<u32>().unwrap_or(0);
    if duration_days == 0 {
        return Err("Enter the tour length in days.");
    }
    let max_group_size = fields.max_group.trim().parse::<u32>().unwrap_or(0);
    if max_group_size == 0 {
        return Err("Enter the maximum group size.");
    }
    let city = fields.city.trim();
    if city.is_empty() {
        return Err("Enter the city.");
    }
    let language = fields.language.trim();
    if language.is_empty() {
        return Err("Enter the tour language.");
    }
    let category = fields.category.trim();
    if category.is_empty() {
        return Err("Pick a category.");
    }

    Ok(ListingDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        itinerary: parse_multiline(&fields.itinerary),
        tour_fee,
        duration_days,
        meeting_point: optional_field(&fields.meeting_point),
        max_group_size,
        city: city.to_owned(),
        country: optional_field(&fields.country),
        language: language.to_owned(),
        category: category.to_owned(),
        images: parse_multiline(&fields.images),
    })
}

/// Prefill the form from an existing listing.
fn fields_from_tour(tour: &Tour) -> ListingFields {
    ListingFields {
        title: tour.title.clone(),
        description: tour.description.clone(),
        itinerary: tour.itinerary.join("\n"),
        fee: tour.tour_fee.to_string(),
        duration: tour.duration_days.to_string(),
        meeting_point: tour.meeting_point.clone().unwrap_or_default(),
        max_group: tour.max_group_size.to_string(),
        city: tour.city.clone(),
        country: tour.country.clone().unwrap_or_default(),
        language: tour.language.clone(),
        category: tour.category.clone(),
        images: tour.images.join("\n"),
    }
}

/// Create-listing route.
#[component]
pub fn NewListingPage() -> impl IntoView {
    view! { <ListingEditor listing_id=None/> }
}

/// Edit-listing route; loads the listing named by the `:id` param.
#[component]
pub fn EditListingPage() -> impl IntoView {
    let params = use_params_map();
    let listing_id = params.with_untracked(|p| p.get("id"));
    view! { <ListingEditor listing_id=listing_id/> }
}

#[component]
fn ListingEditor(listing_id: Option<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let fields = RwSignal::new(ListingFields::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let editing = listing_id.is_some();
    // Signal-held so the submit handler stays `Copy` inside nested views.
    let listing_id = RwSignal::new(listing_id);

    let is_guide = move || {
        session
            .get()
            .user
            .map(|user| user.role == Role::Guide)
            .unwrap_or(false)
    };

    // Prefill when editing an existing listing.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(id) = listing_id.get_untracked() else {
            return;
        };
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_tour(&id).await {
                Some(tour) => fields.set(fields_from_tour(&tour)),
                None => info.set("Failed to load this listing".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match build_listing_draft(&fields.get()) {
            Ok(draft) => draft,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(token) = session.get_untracked().token else {
            return;
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = match listing_id.get_untracked() {
                    Some(id) => crate::net::api::update_listing(&token, &id, &draft).await,
                    None => crate::net::api::create_listing(&token, &draft).await,
                };
                match result {
                    Ok(_) => {
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/dashboard");
                        }
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, draft);
        }
    };

    view! {
        <div class="listing-editor">
            <h1 class="listing-editor__title">
                {if editing { "Edit Tour" } else { "Create New Tour" }}
            </h1>

            <Show
                when=is_guide
                fallback=|| {
                    view! {
                        <p class="listing-editor__not-guide">"Only guide accounts can manage listings."</p>
                    }
                }
            >
                <form class="listing-form" on:submit=on_submit>
                    <label class="listing-form__label">
                        "Title"
                        <input
                            class="listing-form__input"
                            type="text"
                            prop:value=move || fields.get().title
                            on:input=move |ev| fields.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="listing-form__label">
                        "Description"
                        <textarea
                            class="listing-form__textarea"
                            prop:value=move || fields.get().description
                            on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="listing-form__label">
                        "Itinerary (one stop per line)"
                        <textarea
                            class="listing-form__textarea"
                            prop:value=move || fields.get().itinerary
                            on:input=move |ev| fields.update(|f| f.itinerary = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="listing-form__row">
                        <label class="listing-form__label">
                            "Price per person ($)"
                            <input
                                class="listing-form__input"
                                type="number"
                                min="1"
                                prop:value=move || fields.get().fee
                                on:input=move |ev| fields.update(|f| f.fee = event_target_value(&ev))
                            />
                        </label>
                        <label class="listing-form__label">
                            "Duration (days)"
                            <input
                                class="listing-form__input"
                                type="number"
                                min="1"
                                prop:value=move || fields.get().duration
                                on:input=move |ev| fields.update(|f| f.duration = event_target_value(&ev))
                            />
                        </label>
                        <label class="listing-form__label">
                            "Max group size"
                            <input
                                class="listing-form__input"
                                type="number"
                                min="1"
                                prop:value=move || fields.get().max_group
                                on:input=move |ev| fields.update(|f| f.max_group = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="listing-form__row">
                        <label class="listing-form__label">
                            "City"
                            <input
                                class="listing-form__input"
                                type="text"
                                prop:value=move || fields.get().city
                                on:input=move |ev| fields.update(|f| f.city = event_target_value(&ev))
                            />
                        </label>
                        <label class="listing-form__label">
                            "Country"
                            <input
                                class="listing-form__input"
                                type="text"
                                prop:value=move || fields.get().country
                                on:input=move |ev| fields.update(|f| f.country = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="listing-form__row">
                        <label class="listing-form__label">
                            "Language"
                            <input
                                class="listing-form__input"
                                type="text"
                                prop:value=move || fields.get().language
                                on:input=move |ev| fields.update(|f| f.language = event_target_value(&ev))
                            />
                        </label>
                        <label class="listing-form__label">
                            "Category"
                            <input
                                class="listing-form__input"
                                type="text"
                                prop:value=move || fields.get().category
                                on:input=move |ev| fields.update(|f| f.category = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label class="listing-form__label">
                        "Meeting point"
                        <input
                            class="listing-form__input"
                            type="text"
                            prop:value=move || fields.get().meeting_point
                            on:input=move |ev| fields.update(|f| f.meeting_point = event_target_value(&ev))
                        />
                    </label>
                    <label class="listing-form__label">
                        "Image URLs (one per line)"
                        <textarea
                            class="listing-form__textarea"
                            prop:value=move || fields.get().images
                            on:input=move |ev| fields.update(|f| f.images = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <Show when=move || !info.get().is_empty()>
                        <p class="listing-form__message">{move || info.get()}</p>
                    </Show>

                    <div class="listing-form__actions">
                        <a href="/dashboard" class="btn">
                            "Cancel"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    "Saving..."
                                } else if editing {
                                    "Save Changes"
                                } else {
                                    "Publish Tour"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
