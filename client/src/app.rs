//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_guard::SessionGuard;
use crate::components::toaster::Toaster;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, catalog::CatalogPage, watch::WatchPage,
};
use crate::state::{notice::NoticeState, ui::UiState};

/// hls.js is loaded as a global script; playback falls back to native HLS
/// when it is absent.
const HLS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/hls.js@1";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared notice stack and UI preferences, then sets up
/// client-side routing. Everything under `/admin` except the login page sits
/// behind `SessionGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(notices);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vidhost.css"/>
        <Script src=HLS_SCRIPT_URL/>
        <Title text="Video Hosting"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="page-message">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=CatalogPage/>
                    <Route path=(StaticSegment("watch"), ParamSegment("video_id")) view=WatchPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminArea/>
                    <Route path=(StaticSegment("admin"), WildcardSegment("rest")) view=AdminArea/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <SessionGuard>
            <AdminDashboardPage/>
        </SessionGuard>
    }
}
