//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::controller::RegisterOutcome;
use ui::{use_auth, use_delayed_redirect, use_services, AuthState};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let mut redirect = use_delayed_redirect();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the app
    use_effect(move || {
        let state = auth();
        if !state.loading && state.session.is_some() && success.peek().is_none() {
            nav.replace(Route::Notes {});
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            match services
                .controller()
                .register(&email(), &password(), &confirm_password())
                .await
            {
                Ok(RegisterOutcome::SignedIn(session)) => {
                    success.set(Some("Registration successful! Redirecting...".to_string()));
                    auth.set(AuthState::signed_in(Some(session)));
                    redirect.schedule(Route::Notes {}, services.config.ui.login_redirect_delay());
                }
                Ok(RegisterOutcome::ConfirmEmail) => {
                    success.set(Some(
                        "Registration successful! Please check your email to confirm your account."
                            .to_string(),
                    ));
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                    loading.set(false);
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
            h1 { "Create Account" }
            p { class: "tagline", "Sign up for Travel Notes" }

            form {
                class: "auth-form",
                onsubmit: handle_register,
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
                div {
                    class: "form-field",
                    label { r#for: "confirm-password", "Confirm Password" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        required: true,
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
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
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-links",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
