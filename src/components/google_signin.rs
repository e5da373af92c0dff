//! Google federated sign-in button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Google Identity Services widget owns the OAuth exchange end to end;
//! this component only hands the resulting ID token to the backend's
//! verification endpoint and commits the session it mints. The widget needs
//! two things from the host page: the GIS script tag (added in the app
//! shell) and a `GUIDELY_GOOGLE_CLIENT_ID` global. Without either, the
//! button renders nothing.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Container id the GIS widget renders its button into.
#[cfg(feature = "hydrate")]
const BUTTON_ID: &str = "google-signin-button";

/// "Sign in with Google" button driven by the GIS widget.
#[component]
pub fn GoogleSignInButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(install_widget(session, error));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, error);
        }
    });

    view! {
        <div class="google-signin">
            <div id="google-signin-button" class="google-signin__button"></div>
            <Show when=move || !error.get().is_empty()>
                <p class="google-signin__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod gsi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// `google.accounts.id.initialize(config)`
        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"])]
        pub fn initialize(config: &JsValue);

        /// `google.accounts.id.renderButton(parent, options)`
        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
        pub fn render_button(parent: &JsValue, options: &JsValue);
    }
}

/// Wait for the async GIS script, then initialize the widget with a callback
/// that verifies the ID token and commits the session.
#[cfg(feature = "hydrate")]
async fn install_widget(session: RwSignal<SessionState>, error: RwSignal<String>) {
    use wasm_bindgen::prelude::*;

    use crate::util::storage::BrowserStorage;

    let Some(window) = web_sys::window() else {
        return;
    };
    let client_id = js_sys::Reflect::get(&window, &JsValue::from_str("GUIDELY_GOOGLE_CLIENT_ID"))
        .ok()
        .and_then(|v| v.as_string());
    let Some(client_id) = client_id else {
        log::warn!("google sign-in disabled: GUIDELY_GOOGLE_CLIENT_ID is not set");
        return;
    };

    // The GIS script tag is async; poll briefly for the global to appear.
    let mut tries = 0;
    while !js_sys::Reflect::has(&window, &JsValue::from_str("google")).unwrap_or(false) {
        tries += 1;
        if tries > 20 {
            log::warn!("google sign-in disabled: GIS script never loaded");
            return;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;
    }

    let on_credential = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let id_token = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string());
        let Some(id_token) = id_token else {
            error.set("Google login failed - no token received.".to_owned());
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_google_id_token(&id_token).await {
                Ok(auth) => {
                    session.update(|s| s.commit(&BrowserStorage, auth.user, auth.token));
                    if let Some(w) = web_sys::window() {
                        let _ = w.location().set_href("/");
                    }
                }
                Err(e) => error.set(e.message()),
            }
        });
    });

    let config = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&config, &JsValue::from_str("client_id"), &JsValue::from_str(&client_id));
    let _ = js_sys::Reflect::set(&config, &JsValue::from_str("callback"), on_credential.as_ref());
    gsi::initialize(&config);
    // The widget keeps invoking the callback for the page's lifetime.
    on_credential.forget();

    if let Some(container) = window.document().and_then(|d| d.get_element_by_id(BUTTON_ID)) {
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("theme"), &JsValue::from_str("outline"));
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("size"), &JsValue::from_str("large"));
        gsi::render_button(container.as_ref(), &options);
    }
}
