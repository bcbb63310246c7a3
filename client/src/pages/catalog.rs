//! Public catalog page at `/`.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::video_card::VideoCard;
use crate::state::auth::ADMIN_HOME_ROUTE;
use crate::state::catalog::CatalogState;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());

    #[cfg(feature = "hydrate")]
    {
        let mounted = crate::util::mount::MountFlag::install();
        leptos::task::spawn_local(async move {
            let loaded = crate::state::catalog::load_catalog(&crate::net::api::HttpApi).await;
            if mounted.is_mounted() {
                let _ = catalog.try_set(loaded);
            }
        });
    }

    view! {
        <div class="page catalog">
            <header class="page-header">
                <h1 class="page-header__title">"Available Videos"</h1>
                <div class="page-header__actions">
                    <ThemeToggle/>
                    <a class="btn" href=ADMIN_HOME_ROUTE>
                        "Admin"
                    </a>
                </div>
            </header>
            <Show
                when=move || !catalog.with(|c| c.loading)
                fallback=|| view! { <p class="page-message">"Loading videos..."</p> }
            >
                <Show
                    when=move || catalog.with(|c| !c.videos.is_empty())
                    fallback=|| view! { <p class="page-message">"No videos available yet."</p> }
                >
                    <div class="video-grid">
                        <For
                            each=move || catalog.with(|c| c.videos.clone())
                            key=|video| video.id.clone()
                            children=|video| view! { <VideoCard video=video/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
