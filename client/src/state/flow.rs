//! Request phase shared by the one-shot admin forms.

/// `Idle -> Pending -> Idle`; success and failure are reported through a
/// notice on the way back to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    Pending,
}

impl FlowPhase {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}
