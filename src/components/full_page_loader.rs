//! Full-viewport indeterminate loading indicator.

use leptos::prelude::*;

/// Shown while the app cannot render anything meaningful yet (e.g. before
/// session restoration completes).
#[component]
pub fn FullPageLoader() -> impl IntoView {
    view! {
        <div class="full-page-loader" role="status" aria-live="polite">
            <div class="full-page-loader__spinner" aria-hidden="true"></div>
            <p class="full-page-loader__text">"Loading..."</p>
        </div>
    }
}
