//! Admin upload form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and the pending/idle cycle live in `state::upload`. This
//! component wires DOM events to `UploadDraft`, sends the multipart request
//! in the browser build, and reports the outcome through the notice stack.

use leptos::prelude::*;

use crate::components::toaster::show_notice;
use crate::state::notice::{Notice, NoticeState};
use crate::state::upload::{UploadDraft, UploadError};
use crate::util::files::BrowserFile;

// The browser build keeps DOM `File` handles, which are not `Send`.
#[cfg(feature = "hydrate")]
fn draft_signal() -> RwSignal<UploadDraft<BrowserFile>, LocalStorage> {
    RwSignal::new_local(UploadDraft::default())
}

#[cfg(not(feature = "hydrate"))]
fn draft_signal() -> RwSignal<UploadDraft<BrowserFile>> {
    RwSignal::new(UploadDraft::default())
}

/// Upload form. `on_uploaded` runs after the backend accepts a video.
#[component]
pub fn UploadForm(on_uploaded: Callback<()>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let draft = draft_signal();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let pending = move || draft.with(|d| d.phase.is_pending());

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = BrowserFile::from_input(&input) else {
                return;
            };
            if let Some(Err(err)) = draft.try_update(|d| d.select_file(file)) {
                input.set_value("");
                show_notice(notices, Notice::error(err.to_string()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match draft.try_update(UploadDraft::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(UploadError::Busy)) | None => return,
            Some(Err(err)) => {
                show_notice(notices, Notice::error(err.to_string()));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::state::session::LocalSession::default();
            let result = crate::state::upload::submit_upload(&crate::net::api::HttpApi, &session, &request).await;
            let Some(notice) = draft.try_update(|d| d.finish(&result)) else {
                return;
            };
            show_notice(notices, notice);
            if result.is_ok() {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                on_uploaded.run(());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, file_input, on_uploaded);
    };

    view! {
        <section class="upload">
            <h2>"Upload Video"</h2>
            <form class="upload__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Title"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Video title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        disabled=pending
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input field__input--multiline"
                        rows="3"
                        placeholder="Optional description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        disabled=pending
                    ></textarea>
                </label>
                <label class="field">
                    <span class="field__label">"Video file"</span>
                    <input
                        class="field__input"
                        type="file"
                        accept="video/*"
                        node_ref=file_input
                        on:change=on_file_change
                        disabled=pending
                    />
                    <span class="field__hint">
                        {move || draft.with(|d| d.file_name()).unwrap_or_else(|| "No file selected".to_owned())}
                    </span>
                </label>
                <button class="btn btn--primary" type="submit" disabled=pending>
                    {move || if pending() { "Uploading..." } else { "Upload Video" }}
                </button>
            </form>
        </section>
    }
}
