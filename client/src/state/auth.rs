//! Admin session gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the `SessionGuard` component in front of `/admin/*` and by the
//! login page. The guard starts `Pending`, performs at most one verification
//! per mount, and fails closed: a missing token, a rejected token, and a
//! failed request all end in `Denied`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::warn;

use super::session::SessionStore;
use crate::net::api::VideoApi;
use crate::net::error::ApiError;

/// Route the guard sends unauthenticated visitors to.
pub const ADMIN_LOGIN_ROUTE: &str = "/admin/login";
/// Landing route after a successful sign-in.
pub const ADMIN_HOME_ROUTE: &str = "/admin";

/// Verification state of a protected route mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardMode {
    /// Verification has not resolved yet.
    #[default]
    Pending,
    Denied,
    Allowed,
}

/// What a protected route renders for a given mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Nothing,
    Redirect(&'static str),
    Children,
}

/// Map guard mode to output. `Pending` never yields `Children`.
pub fn guard_view(mode: GuardMode) -> GuardView {
    match mode {
        GuardMode::Pending => GuardView::Nothing,
        GuardMode::Denied => GuardView::Redirect(ADMIN_LOGIN_ROUTE),
        GuardMode::Allowed => GuardView::Children,
    }
}

/// Fold a verification result into a final mode.
pub fn mode_for_verification(result: &Result<(), ApiError>) -> GuardMode {
    if result.is_ok() { GuardMode::Allowed } else { GuardMode::Denied }
}

/// Resolve the guard for the stored session. No request is made when no
/// token is stored.
pub async fn check_session<A, S>(api: &A, session: &S) -> GuardMode
where
    A: VideoApi,
    S: SessionStore,
{
    let Some(token) = session.token() else {
        return GuardMode::Denied;
    };
    let result = api.verify_token(&token).await;
    if let Err(err) = &result {
        warn!("admin session rejected: {err}");
    }
    mode_for_verification(&result)
}

/// Exchange credentials for a token and store it. The store is untouched on
/// failure.
///
/// # Errors
///
/// Returns the backend or transport error from the login request.
pub async fn sign_in<A, S>(api: &A, session: &S, username: &str, password: &str) -> Result<(), ApiError>
where
    A: VideoApi,
    S: SessionStore,
{
    let token = api.login(username, password).await?;
    session.set_token(&token);
    Ok(())
}

/// Forget the stored token.
pub fn sign_out<S: SessionStore>(session: &S) {
    session.clear();
}
