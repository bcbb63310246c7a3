//! Admin session token access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard, the login page, logout, and every admin mutation read or write
//! the token through `SessionStore`, never through storage directly. The
//! browser build persists to `localStorage`; tests use `MemorySession`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::util::storage;

/// `localStorage` key holding the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Get/set/clear access to the current admin token.
pub trait SessionStore {
    /// The stored token, if any. Blank values count as absent.
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str);

    fn clear(&self);
}

/// Token persisted in browser `localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalSession {
    key: &'static str,
}

impl Default for LocalSession {
    fn default() -> Self {
        Self { key: ADMIN_TOKEN_KEY }
    }
}

impl SessionStore for LocalSession {
    fn token(&self) -> Option<String> {
        normalize(storage::get_item(self.key))
    }

    fn set_token(&self, token: &str) {
        storage::set_item(self.key, token);
    }

    fn clear(&self) {
        storage::remove_item(self.key);
    }
}

/// In-process token holder.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        normalize(self.token.borrow().clone())
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.filter(|t| !t.trim().is_empty())
}
