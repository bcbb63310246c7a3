//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin_dashboard;
pub mod admin_login;
pub mod catalog;
pub mod watch;
