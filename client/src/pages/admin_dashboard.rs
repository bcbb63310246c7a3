//! Admin dashboard at `/admin`, rendered behind `SessionGuard`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_video_list::AdminVideoList;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::upload_form::UploadForm;
use crate::state::auth::{ADMIN_LOGIN_ROUTE, sign_out};
use crate::state::session::LocalSession;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let refresh = RwSignal::new(0_u64);
    let navigate = use_navigate();

    // A successful upload bumps the counter so the list reloads.
    let on_uploaded = Callback::new(move |()| refresh.update(|n| *n += 1));

    let on_logout = move |_| {
        sign_out(&LocalSession::default());
        navigate(ADMIN_LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="page admin">
            <header class="page-header">
                <h1 class="page-header__title">"Admin Dashboard"</h1>
                <div class="page-header__actions">
                    <a class="btn" href="/">
                        "View Site"
                    </a>
                    <ThemeToggle/>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>
            <UploadForm on_uploaded=on_uploaded/>
            <AdminVideoList refresh=refresh/>
        </div>
    }
}
