//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of domain state (catalog, session) so
//! chrome can change without touching data flows.

/// Shared UI preferences provided via context.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}
