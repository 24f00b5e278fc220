//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_auth, use_delayed_redirect, use_services, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let mut redirect = use_delayed_redirect();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the app
    use_effect(move || {
        let state = auth();
        if !state.loading && state.session.is_some() && success.peek().is_none() {
            tracing::info!("[AUTH] User already logged in, redirecting to app");
            nav.replace(Route::Notes {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            match services.controller().sign_in(&email(), &password()).await {
                Ok(response) => {
                    success.set(Some("Login successful! Redirecting...".to_string()));
                    auth.set(AuthState::signed_in(response.session));
                    redirect.schedule(Route::Notes {}, services.config.ui.login_redirect_delay());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "centered-page auth-page",
            h1 { "Login" }
            p { class: "tagline", "Welcome back to Travel Notes" }

            form {
                class: "auth-form",
                onsubmit: handle_login,
                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    div { class: "flash error", "{message}" }
                }
                if let Some(message) = success() {
                    div { class: "flash success", "{message}" }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "auth-links",
                Link { to: Route::ForgotPassword {}, "Forgot your password?" }
            }
            p {
                class: "auth-links",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
