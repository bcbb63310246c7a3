//! Route gate for the admin area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every `/admin/*` route except the login page. Renders nothing while
//! the stored token is being verified, then either the children or a
//! replacing redirect to the login route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::{GuardMode, GuardView, guard_view};

#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let mode = RwSignal::new(GuardMode::Pending);

    // One verification per mount; a late answer after unmount is dropped.
    #[cfg(feature = "hydrate")]
    {
        let mounted = crate::util::mount::MountFlag::install();
        leptos::task::spawn_local(async move {
            let session = crate::state::session::LocalSession::default();
            let resolved = crate::state::auth::check_session(&crate::net::api::HttpApi, &session).await;
            if mounted.is_mounted() {
                let _ = mode.try_set(resolved);
            }
        });
    }

    move || match guard_view(mode.get()) {
        GuardView::Nothing => ().into_any(),
        GuardView::Redirect(path) => view! {
            <Redirect path=path options=NavigateOptions { replace: true, ..NavigateOptions::default() }/>
        }
        .into_any(),
        GuardView::Children => children().into_any(),
    }
}
