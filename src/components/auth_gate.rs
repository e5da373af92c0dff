//! Gate that holds the app tree until session restoration completes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens branch on the signed-in user; rendering them before the
//! startup restore finishes would flash the anonymous variant at returning
//! users. The gate is a pure function of `restored` — restoration itself
//! never fails observably, so there is no error branch.

use leptos::prelude::*;

use crate::components::full_page_loader::FullPageLoader;
use crate::state::session::SessionState;

/// Render `children` only once the session store has finished its
/// load-from-storage attempt; a full-page loader fills the interim.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().restored fallback=|| view! { <FullPageLoader/> }>
            {children()}
        </Show>
    }
}
