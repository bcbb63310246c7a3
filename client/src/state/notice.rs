//! Transient notifications ("toasts") for flow outcomes.
//!
//! DESIGN
//! ======
//! Flows return a `Notice` value instead of touching UI state, so their
//! success/failure wording is testable without a reactive runtime.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// A notice on screen, keyed for dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Stack of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<NoticeEntry>,
    next_id: u64,
}

impl NoticeState {
    /// Show `notice` and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(NoticeEntry { id, notice });
        id
    }

    /// Remove the notice with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|entry| entry.id != id);
    }
}
