//! Admin video grid with per-video delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reloads whenever `refresh` changes (the dashboard bumps it after an
//! upload). Deletion goes through a confirm dialog and `DeleteFlow`, then
//! re-fetches the list exactly once.

use leptos::prelude::*;

use crate::components::toaster::show_notice;
use crate::net::types::Video;
use crate::pages::watch::watch_path;
use crate::state::admin::DeleteFlow;
use crate::state::catalog::CatalogState;
use crate::state::notice::NoticeState;
use crate::util::format::{format_duration, format_upload_date};

const NO_DESCRIPTION: &str = "No description";

#[component]
pub fn AdminVideoList(#[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let catalog = RwSignal::new(CatalogState::default());
    let deletion = RwSignal::new(DeleteFlow::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::VideoApi as _;
        use crate::state::notice::Notice;
        use crate::util::mount::{Generation, MountFlag};

        let mounted = MountFlag::install();
        let generation = Generation::new();
        Effect::new(move || {
            refresh.track();
            let mounted = mounted.clone();
            let generation = generation.clone();
            let ticket = generation.next();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::HttpApi.list_videos().await;
                if !mounted.is_mounted() || !generation.is_current(ticket) {
                    return;
                }
                if let Some(err) = catalog.try_update(|c| c.apply(result)).flatten() {
                    leptos::logging::warn!("error loading admin videos: {err}");
                    show_notice(notices, Notice::error("Failed to load videos"));
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = refresh;

    let on_confirm = Callback::new(move |()| {
        let Some(video_id) = deletion.try_update(DeleteFlow::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::state::session::LocalSession::default();
            let outcome = crate::state::admin::delete_and_refresh(&crate::net::api::HttpApi, &session, &video_id).await;
            let notice = deletion.try_update(|flow| catalog.try_update(|list| flow.finish(outcome, list))).flatten();
            if let Some(notice) = notice {
                show_notice(notices, notice);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (video_id, notices);
    });

    view! {
        <section class="admin-videos">
            <h2>"Video Management"</h2>
            <Show
                when=move || !catalog.with(|c| c.loading)
                fallback=|| view! { <p class="page-message">"Loading videos..."</p> }
            >
                <Show
                    when=move || catalog.with(|c| !c.videos.is_empty())
                    fallback=|| view! { <p class="page-message">"No videos uploaded yet."</p> }
                >
                    <div class="admin-videos__grid">
                        <For
                            each=move || catalog.with(|c| c.videos.clone())
                            key=|video| video.id.clone()
                            children=move |video| view! { <AdminVideoCard video=video deletion=deletion/> }
                        />
                    </div>
                </Show>
            </Show>
            <Show when=move || deletion.with(|d| d.confirming.is_some())>
                <DeleteVideoDialog deletion=deletion on_confirm=on_confirm/>
            </Show>
        </section>
    }
}

#[component]
fn AdminVideoCard(video: Video, deletion: RwSignal<DeleteFlow>) -> impl IntoView {
    let id = video.id.clone();
    let href = watch_path(&video.id);
    let description = if video.description.trim().is_empty() {
        NO_DESCRIPTION.to_owned()
    } else {
        video.description.clone()
    };
    let uploaded = format!("Uploaded on {}", format_upload_date(&video.created_at));
    let duration = format!("Duration: {}", format_duration(video.duration));

    view! {
        <article class="admin-card">
            <h3 class="admin-card__title">{video.title}</h3>
            <p class="admin-card__date">{uploaded}</p>
            <p class="admin-card__description">{description}</p>
            <p class="admin-card__duration">{duration}</p>
            <div class="admin-card__actions">
                <a class="btn" href=href target="_blank" rel="noopener noreferrer">
                    "View"
                </a>
                <button class="btn btn--danger" on:click=move |_| deletion.update(|d| d.request(&id))>
                    "Delete"
                </button>
            </div>
        </article>
    }
}

/// Confirm dialog for the video in `DeleteFlow::confirming`.
#[component]
fn DeleteVideoDialog(deletion: RwSignal<DeleteFlow>, on_confirm: Callback<()>) -> impl IntoView {
    let pending = move || deletion.with(|d| d.phase.is_pending());

    view! {
        <div class="dialog-backdrop" on:click=move |_| deletion.update(DeleteFlow::cancel)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Video"</h2>
                <p class="dialog__danger">"Are you sure you want to delete this video?"</p>
                <div class="dialog__actions">
                    <button class="btn" disabled=pending on:click=move |_| deletion.update(DeleteFlow::cancel)>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=pending on:click=move |_| on_confirm.run(())>
                        {move || if pending() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
