//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button class="btn btn--icon theme-toggle" title="Toggle theme" aria-label="Toggle theme" on:click=on_toggle>
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
