//! Transient notices for flow outcomes.
//!
//! Notices live in a shared `RwSignal<NoticeState>` context. Each one
//! dismisses itself after a few seconds in the browser build, or earlier on
//! click.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};

#[cfg(feature = "hydrate")]
const NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Push `notice` and schedule its dismissal. A disposed notice signal is
/// ignored.
pub fn show_notice(notices: RwSignal<NoticeState>, notice: Notice) {
    let Some(id) = notices.try_update(|n| n.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(NOTICE_TTL).await;
        let _ = notices.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notices.with(|n| n.items.clone())
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let is_error = entry.notice.kind == NoticeKind::Error;
                    view! {
                        <button
                            class="toast"
                            class:toast--error=is_error
                            class:toast--success=!is_error
                            title="Dismiss"
                            on:click=move |_| notices.update(|n| n.dismiss(id))
                        >
                            {entry.notice.message}
                        </button>
                    }
                }
            />
        </div>
    }
}
