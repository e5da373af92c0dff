//! Registration page with role choice (explore vs. guide).

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::google_signin::GoogleSignInButton;
use crate::net::types::Role;
use crate::state::session::SessionState;

/// Minimum accepted password length, mirrored from the backend's policy.
const MIN_PASSWORD_LEN: usize = 6;

/// Validate and normalize the form fields before hitting the network.
fn validate_register_input(name: &str, email: &str, password: &str) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    let password = password.trim();
    if name.is_empty() {
        return Err("Enter your full name.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Pre-select the role from a `?role=` query value. Only the two signup
/// roles are reachable here; anything else falls back to tourist.
fn role_from_query(raw: Option<&str>) -> Role {
    match raw {
        Some("GUIDE") => Role::Guide,
        _ => Role::Tourist,
    }
}

/// Account creation page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let initial_role = role_from_query(query.with_untracked(|q| q.get("role")).as_deref());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(initial_role);
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
        let (name_value, email_value, password_value) =
            match validate_register_input(&name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        let role_value = role.get();
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::util::storage::BrowserStorage;

            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&name_value, &email_value, &password_value, role_value).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(auth) => {
                        session.update(|s| s.commit(&BrowserStorage, auth.user, auth.token));
                        navigate("/", Default::default());
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
            let _ = (name_value, email_value, password_value, role_value, &navigate, session);
        }
    };

    view! {
        <div class="login-page login-page--register">
            <div class="login-card">
                <a href="/" class="login-card__brand">
                    "Guidely"
                </a>
                <h1>"Create account"</h1>
                <p class="login-card__subtitle">"Join our community of travelers and guides."</p>

                <form class="login-form" on:submit=on_submit>
                    <fieldset class="role-picker">
                        <legend class="login-form__label">"I want to"</legend>
                        <button
                            type="button"
                            class=move || {
                                if role.get() == Role::Tourist { "role-picker__option role-picker__option--active" } else { "role-picker__option" }
                            }
                            on:click=move |_| role.set(Role::Tourist)
                        >
                            <span class="role-picker__title">"Explore"</span>
                            <span class="role-picker__hint">"Find amazing tours"</span>
                        </button>
                        <button
                            type="button"
                            class=move || {
                                if role.get() == Role::Guide { "role-picker__option role-picker__option--active" } else { "role-picker__option" }
                            }
                            on:click=move |_| role.set(Role::Guide)
                        >
                            <span class="role-picker__title">"Guide"</span>
                            <span class="role-picker__hint">"Share your city"</span>
                        </button>
                    </fieldset>

                    <label class="login-form__label">
                        "Full Name"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Ana Perez"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                            placeholder="At least 6 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>

                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or continue with"</p>
                <GoogleSignInButton/>

                <p class="login-card__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
