use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Top bar of the signed-in pages.
#[component]
pub fn AppHeader() -> Element {
    let auth = use_auth();
    let email = auth().email().unwrap_or("Guest").to_string();

    rsx! {
        header {
            class: "app-header",
            Link { class: "brand", to: Route::Notes {}, "Travel Notes" }
            nav {
                class: "app-nav",
                span { class: "user-email", "{email}" }
                Link { to: Route::Notes {}, "My Notes" }
                Link { to: Route::Profile {}, "Profile" }
                LogoutButton { class: "secondary" }
            }
        }
    }
}
