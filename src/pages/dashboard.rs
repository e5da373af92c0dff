//! Dashboard page: dispatches the signed-in user to their role's view.
//!
//! ARCHITECTURE
//! ============
//! The role set is a closed enum, so the dispatch below is an exhaustive
//! match — adding a role is a compile-time decision, not a silent
//! fallthrough. The anonymous case renders a login prompt rather than
//! redirecting, matching the rest of the marketplace's soft-gating.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::admin_dashboard::AdminDashboard;
use crate::components::guide_dashboard::GuideDashboard;
use crate::components::tourist_dashboard::TouristDashboard;
use crate::net::types::Role;
use crate::state::session::SessionState;

/// The four mutually exclusive things the dashboard route can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DashboardVariant {
    LoginPrompt,
    Tourist,
    Guide,
    Admin,
}

/// Total mapping from session to dashboard variant. Every reachable role
/// has a branch; no session means the login prompt.
fn dashboard_variant(session: &SessionState) -> DashboardVariant {
    match &session.user {
        None => DashboardVariant::LoginPrompt,
        Some(user) => match user.role {
            Role::Admin => DashboardVariant::Admin,
            Role::Guide => DashboardVariant::Guide,
            Role::Tourist => DashboardVariant::Tourist,
        },
    }
}

/// Role-dispatched dashboard route.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="dashboard-page">
            {move || match dashboard_variant(&session.get()) {
                DashboardVariant::LoginPrompt => view! { <LoginPrompt/> }.into_any(),
                DashboardVariant::Tourist => view! { <TouristDashboard/> }.into_any(),
                DashboardVariant::Guide => view! { <GuideDashboard/> }.into_any(),
                DashboardVariant::Admin => view! { <AdminDashboard/> }.into_any(),
            }}
        </div>
    }
}

/// Shown when the dashboard is visited without a session.
#[component]
fn LoginPrompt() -> impl IntoView {
    view! {
        <div class="login-prompt">
            <h1 class="login-prompt__title">"Please log in to access your dashboard"</h1>
            <p class="login-prompt__text">"You need to be logged in to view this page."</p>
            <a href="/login?callbackUrl=/dashboard" class="btn btn--primary">
                "Log In"
            </a>
        </div>
    }
}
