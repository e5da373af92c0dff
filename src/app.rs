//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::navbar::Navbar;
use crate::pages::bookings::BookingsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::explore::ExplorePage;
use crate::pages::home::HomePage;
use crate::pages::listing_editor::{EditListingPage, NewListingPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::tour_detail::TourDetailPage;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                // Google Identity Services, consumed by the sign-in button.
                <script src="https://accounts.google.com/gsi/client" async defer></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, restores the persisted session
/// exactly once at startup, and gates the routed tree on that restoration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    // One restoration attempt per app lifetime, before the gate opens.
    Effect::new(move || {
        session.update(|s| {
            if !s.restored {
                s.restore(&BrowserStorage);
            }
        });
    });

    // Dark mode: pick up the stored/system preference on the client.
    Effect::new(move || {
        let preferred = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(preferred);
        ui.update(|u| u.dark_mode = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/guidely-ui.css"/>
        <Title text="Guidely"/>

        <Router>
            <AuthGate>
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("explore") view=ExplorePage/>
                        <Route path=(StaticSegment("tours"), ParamSegment("id")) view=TourDetailPage/>
                        <Route path=StaticSegment("bookings") view=BookingsPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route
                            path=(StaticSegment("dashboard"), StaticSegment("listings"), StaticSegment("new"))
                            view=NewListingPage
                        />
                        <Route
                            path=(
                                StaticSegment("dashboard"),
                                StaticSegment("listings"),
                                ParamSegment("id"),
                                StaticSegment("edit"),
                            )
                            view=EditListingPage
                        />
                    </Routes>
                </main>
            </AuthGate>
        </Router>
    }
}
