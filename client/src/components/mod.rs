//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog, playback, and admin surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod admin_video_list;
pub mod session_guard;
pub mod theme_toggle;
pub mod toaster;
pub mod upload_form;
pub mod video_card;
pub mod video_player;
