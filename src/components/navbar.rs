//! Top navigation bar with auth-aware actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the one place the signed-in identity is always visible, and
//! the only chrome-level mutator of the session (logout).

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Site-wide navigation header.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let display_name = move || {
        session
            .get()
            .user
            .and_then(|user| user.name)
            .unwrap_or_else(|| "Traveler".to_owned())
    };

    let on_logout = move |_| {
        session.update(|s| s.clear(&BrowserStorage));
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        }
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                <span class="navbar__brand-mark" aria-hidden="true">"◈"</span>
                "Guidely"
            </a>

            <nav class="navbar__links">
                <a href="/explore" class="navbar__link">
                    "Explore"
                </a>
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__auth">
                            <a href="/login" class="btn navbar__login">
                                "Log In"
                            </a>
                            <a href="/register" class="btn btn--primary navbar__register">
                                "Sign Up"
                            </a>
                        </div>
                    }
                }
            >
                <div class="navbar__auth">
                    <a href="/dashboard" class="navbar__link">
                        "Dashboard"
                    </a>
                    <a href="/bookings" class="navbar__link">
                        "My Bookings"
                    </a>
                    <span class="navbar__self">{display_name}</span>
                    <button class="btn navbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </div>
            </Show>
        </header>
    }
}
