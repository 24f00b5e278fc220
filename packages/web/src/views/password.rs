//! Forgot-password and reset-password pages.

use dioxus::prelude::*;
use ui::{use_delayed_redirect, use_services, FlashBanner, FlashKind, FlashMessage};

use crate::Route;

/// The `#access_token=...` part of the current URL. Only browsers have one.
fn location_fragment() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

fn outcome(result: Result<String, String>) -> FlashMessage {
    match result {
        Ok(text) => FlashMessage {
            kind: FlashKind::Success,
            text,
        },
        Err(text) => FlashMessage {
            kind: FlashKind::Error,
            text,
        },
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut message = use_signal(|| Option::<FlashMessage>::None);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            loading.set(true);
            message.set(None);
            let result = services
                .controller()
                .request_password_reset(&email())
                .await
                .map_err(|e| e.to_string());
            if result.is_ok() {
                email.set(String::new());
            }
            message.set(Some(outcome(result)));
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "centered-page auth-page",
            h1 { "Forgot Password" }
            p { class: "tagline", "We will email you a link to choose a new one." }

            form {
                class: "auth-form",
                onsubmit: submit,
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
                FlashBanner { message: message() }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Sending..." } else { "Send Reset Link" }
                }
            }

            p {
                class: "auth-links",
                Link { to: Route::Login {}, "Back to login" }
            }
        }
    }
}

#[component]
pub fn ResetPassword() -> Element {
    let services = use_services();
    let mut redirect = use_delayed_redirect();
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut message = use_signal(|| Option::<FlashMessage>::None);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            loading.set(true);
            message.set(None);
            let fragment = location_fragment();
            let result = services
                .controller()
                .reset_password(&password(), &confirm_password(), &fragment)
                .await
                .map_err(|e| e.to_string());
            match &result {
                Ok(_) => redirect.schedule(Route::Login {}, services.config.ui.reset_redirect_delay()),
                Err(_) => loading.set(false),
            }
            message.set(Some(outcome(result)));
        });
    };

    rsx! {
        div {
            class: "centered-page auth-page",
            h1 { "Reset Password" }
            p { class: "tagline", "Choose a new password." }

            form {
                class: "auth-form",
                onsubmit: submit,
                div {
                    class: "form-field",
                    label { r#for: "password", "New Password" }
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
                FlashBanner { message: message() }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Resetting..." } else { "Reset Password" }
                }
            }

            p {
                class: "auth-links",
                Link { to: Route::Login {}, "Back to login" }
            }
        }
    }
}
