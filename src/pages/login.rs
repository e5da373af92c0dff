//! Login page with credential form and Google federated sign-in.
//!
//! ERROR HANDLING
//! ==============
//! Auth failures surface here as form messages; the session layer never
//! retries. The `busy` flag suppresses duplicate submission while a request
//! is in flight, and a completion that lands after the user has left the
//! page is abandoned before it can commit.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::google_signin::GoogleSignInButton;
use crate::state::session::SessionState;

/// Trim both fields and require them non-empty before hitting the network.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to send the user after a successful login.
fn resolve_callback_url(raw: Option<String>) -> String {
    match raw {
        Some(url) if !url.is_empty() => url,
        _ => "/".to_owned(),
    }
}

/// Credential login page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Stale-completion guard: cleared when the page unmounts.
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::util::storage::BrowserStorage;

            let alive = alive.clone();
            let navigate = navigate.clone();
            let target = resolve_callback_url(query.with_untracked(|q| q.get("callbackUrl")));
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&email_value, &password_value).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    // The user left this page; abandon without committing.
                    return;
                }
                match result {
                    Ok(auth) => {
                        session.update(|s| s.commit(&BrowserStorage, auth.user, auth.token));
                        navigate(&target, Default::default());
                    }
                    Err(e) => {
                        info.set(e.message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate, query, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__brand">
                    "Guidely"
                </a>
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to continue your adventure."</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="hello@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>

                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or continue with"</p>
                <GoogleSignInButton/>

                <p class="login-card__footer">
                    "New to Guidely? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
