//! Application state and the flows that drive it.
//!
//! ARCHITECTURE
//! ============
//! Each module pairs a plain state struct with the async orchestration that
//! fills it. Components wrap these in signals; tests drive them directly
//! against in-memory fakes.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod flow;
pub mod notice;
pub mod playback;
pub mod session;
pub mod ui;
pub mod upload;
