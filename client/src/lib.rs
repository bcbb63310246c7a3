//! # client
//!
//! Leptos + WASM front end for the video hosting site: the public catalog,
//! the watch page with HLS playback, and the token-gated admin area for
//! uploading and deleting videos.
//!
//! The crate builds twice. With `ssr` the server renders the shell and pages;
//! with `hydrate` the browser build takes over the same tree and performs all
//! network and DOM work.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
