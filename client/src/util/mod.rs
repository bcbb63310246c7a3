//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod files;
pub mod format;
#[cfg(feature = "hydrate")]
pub mod hls;
pub mod mount;
pub mod storage;
pub mod theme;
