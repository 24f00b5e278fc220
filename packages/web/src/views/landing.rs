//! Landing page: who is signed in and where to go next.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let state = auth();

    let actions = if state.loading {
        rsx! {
            div { class: "loading", "Loading..." }
        }
    } else if let Some(email) = state.email() {
        rsx! {
            div { class: "user-status logged-in", "Logged in as: {email}" }
            div {
                class: "button-row",
                Link { class: "button primary", to: Route::Notes {}, "Go to App" }
                Link { class: "button secondary", to: Route::Profile {}, "Profile" }
                LogoutButton { class: "secondary" }
            }
        }
    } else {
        rsx! {
            div {
                class: "button-row",
                Link { class: "button primary", to: Route::Login {}, "Login" }
                Link { class: "button secondary", to: Route::Register {}, "Register" }
            }
        }
    };

    rsx! {
        div {
            class: "centered-page landing",
            h1 { "Travel Notes" }
            p {
                class: "tagline",
                "Jot down where you want to go. Get a day-by-day plan for it."
            }
            {actions}
        }
    }
}
