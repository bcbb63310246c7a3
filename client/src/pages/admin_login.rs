//! Admin login page at `/admin/login`.
//!
//! Exchanges a username and password for a bearer token, stores it, and
//! moves on to the dashboard. Already-signed-in visitors are not redirected;
//! the guard on `/admin` does that check.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

pub(crate) const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are sent verbatim.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let session = crate::state::session::LocalSession::default();
                match crate::state::auth::sign_in(&crate::net::api::HttpApi, &session, &user, &pass).await {
                    Ok(()) => navigate(crate::state::auth::ADMIN_HOME_ROUTE, leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("admin login failed: {err}");
                        let _ = error.try_set(Some(err.user_message("Invalid credentials")));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, pass);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"Admin Login"</h1>
                    <ThemeToggle/>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <a class="back-link" href="/">
                    "← Back to videos"
                </a>
            </div>
        </div>
    }
}
