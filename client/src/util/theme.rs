//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Dark is the default when
//! nothing is stored.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage;

const STORAGE_KEY: &str = "vidhost_theme";

/// Interpret a stored preference value. Anything but `"light"` is dark.
pub(crate) fn parse_preference(stored: Option<&str>) -> bool {
    !matches!(stored.map(str::trim), Some("light"))
}

/// Read the dark mode preference, defaulting to dark.
pub fn read_preference() -> bool {
    parse_preference(storage::get_item(STORAGE_KEY).as_deref())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_name(dark));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set_item(STORAGE_KEY, theme_name(next));
    next
}

pub(crate) fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
