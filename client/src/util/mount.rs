//! Guards that keep late async results away from discarded views.
//!
//! DESIGN
//! ======
//! A spawned fetch can outlive the component that started it. `MountFlag`
//! flips on cleanup so the task drops its result; `Generation` does the same
//! for re-fetches driven by a changing route parameter, where only the newest
//! request may land.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared "still mounted" flag for one component instance.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl Default for MountFlag {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag that is cleared when the current reactive owner is
    /// cleaned up.
    pub fn install() -> Self {
        let flag = Self::new();
        let on_unmount = flag.clone();
        leptos::prelude::on_cleanup(move || on_unmount.unmount());
        flag
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Monotonic request counter; only the latest ticket is current.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request and return its ticket.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}
