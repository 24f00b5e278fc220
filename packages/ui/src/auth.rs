//! Authentication context and hooks for the UI.

use api::Session;
use dioxus::prelude::*;

use crate::{use_delayed_redirect, use_services};

/// Who is signed in, as last read from the auth client.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(session: Option<Session>) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.email.as_str())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that reads the stored session once on mount.
/// Wrap your app with this component (inside `ServicesProvider`).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_services();
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || {
        let services = services.clone();
        async move {
            let session = services.controller().current_session().await;
            auth_state.set(AuthState::signed_in(session));
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Renders `children` only with a session. Without one, shows an error and
/// redirects to `login_path` after the configured delay.
#[component]
pub fn RequireSession(
    #[props(default = "/login".to_string())] login_path: String,
    children: Element,
) -> Element {
    let auth = use_auth();
    let services = use_services();
    let mut redirect = use_delayed_redirect();
    let delay = services.config.ui.auth_redirect_delay();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.session.is_none() && !redirect.is_pending() {
            redirect.schedule_path(login_path.clone(), delay);
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }
    if state.session.is_none() {
        return rsx! {
            div {
                class: "error",
                "You are not logged in. Redirecting to login page..."
            }
        };
    }

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let services = services.clone();
        async move {
            busy.set(true);
            services.controller().sign_out().await;
            auth_state.set(AuthState::signed_in(None));
            busy.set(false);
            nav.push("/");
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::SessionUser;

    #[test]
    fn test_state_email() {
        assert_eq!(AuthState::default().email(), None);
        assert!(AuthState::default().loading);

        let state = AuthState::signed_in(Some(Session {
            access_token: "t".into(),
            user: SessionUser {
                id: "u".into(),
                email: "user@test.com".into(),
                role: None,
            },
        }));
        assert!(!state.loading);
        assert_eq!(state.email(), Some("user@test.com"));
    }
}
