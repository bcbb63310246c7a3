//! `<video>` element with HLS playback attached.
//!
//! DESIGN
//! ======
//! The DOM element is owned by the view; the decoder or native source is
//! owned by a `PlaybackController` kept in a local stored value. A change of
//! `video_id` rebinds the same element, and unmount releases it.

use leptos::prelude::*;

use crate::state::playback::PlaybackMode;

#[component]
pub fn VideoPlayer(#[prop(into)] video_id: Signal<String>) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let mode = RwSignal::new(PlaybackMode::Idle);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::playback::PlaybackController;
        use crate::util::hls::HlsBackend;

        let controller = StoredValue::new_local(None::<PlaybackController<HlsBackend>>);

        Effect::new(move || {
            let id = video_id.get();
            let Some(video) = video_ref.get() else {
                return;
            };
            let bound = controller.try_update_value(|slot| {
                slot.get_or_insert_with(|| PlaybackController::new(HlsBackend::new(video))).bind(&id)
            });
            if let Some(bound) = bound {
                mode.set(bound);
            }
        });

        on_cleanup(move || {
            let _ = controller.try_update_value(|slot| {
                if let Some(playback) = slot.as_mut() {
                    playback.release();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = video_id;

    view! {
        <div class="player">
            <video class="player__video" node_ref=video_ref controls=true playsinline=true></video>
            <Show when=move || mode.get() == PlaybackMode::Unsupported>
                <p class="player__unsupported">"This browser cannot play HLS streams."</p>
            </Show>
        </div>
    }
}
