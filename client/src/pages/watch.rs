//! Watch page at `/watch/:video_id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads one video's metadata and mounts `VideoPlayer` once it resolves. A
//! route change to another id starts a new load; answers for an older id or
//! for an unmounted page are dropped.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::video_player::VideoPlayer;
use crate::state::catalog::VideoDetail;
use crate::util::format::{format_duration, format_upload_date};

/// Client route for a video's watch page.
pub fn watch_path(video_id: &str) -> String {
    format!("/watch/{video_id}")
}

#[component]
pub fn WatchPage() -> impl IntoView {
    let params = use_params_map();
    let video_id = Signal::derive(move || params.with(|p| p.get("video_id").unwrap_or_default()));
    let detail = RwSignal::new(VideoDetail::Loading);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::mount::{Generation, MountFlag};

        let mounted = MountFlag::install();
        let generation = Generation::new();
        Effect::new(move || {
            let id = video_id.get();
            let ticket = generation.next();
            if detail.with_untracked(|d| *d != VideoDetail::Loading) {
                detail.set(VideoDetail::Loading);
            }
            let mounted = mounted.clone();
            let generation = generation.clone();
            leptos::task::spawn_local(async move {
                let loaded = crate::state::catalog::load_video(&crate::net::api::HttpApi, &id).await;
                if mounted.is_mounted() && generation.is_current(ticket) {
                    let _ = detail.try_set(loaded);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = video_id;

    view! {
        <div class="page watch">
            <header class="page-header">
                <a class="back-link" href="/">
                    "← Back to videos"
                </a>
                <div class="page-header__actions">
                    <ThemeToggle/>
                </div>
            </header>
            {move || match detail.get() {
                VideoDetail::Loading => view! { <p class="page-message">"Loading video..."</p> }.into_any(),
                VideoDetail::Missing => view! { <p class="page-message">"Video not found"</p> }.into_any(),
                VideoDetail::Ready(video) => {
                    let meta = format!(
                        "Uploaded on {} · {}",
                        format_upload_date(&video.created_at),
                        format_duration(video.duration),
                    );
                    view! {
                        <article class="watch__body">
                            <VideoPlayer video_id=video.id.clone()/>
                            <h1 class="watch__title">{video.title}</h1>
                            <p class="watch__meta">{meta}</p>
                            <p class="watch__description">{video.description}</p>
                        </article>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
