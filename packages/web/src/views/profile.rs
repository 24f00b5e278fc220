//! Travel preferences the plan generator works from.

use dioxus::prelude::*;
use store::PreferenceOptionSet;
use ui::components::PreferencesFormView;
use ui::state::PreferencesForm;
use ui::{
    use_auth, use_delayed_redirect, use_flash, use_services, AuthState, FlashBanner, PageError,
    RequireSession,
};

use super::AppHeader;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        AppHeader {}
        RequireSession {
            ProfilePage {}
        }
    }
}

#[component]
fn ProfilePage() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut flash = use_flash();
    let mut redirect = use_delayed_redirect();
    let mut form = use_signal(|| Option::<PreferencesForm>::None);
    let mut saving = use_signal(|| false);

    let load_services = services.clone();
    use_future(move || {
        let services = load_services.clone();
        async move {
            match services.controller().load_profile().await {
                Ok(loaded) => form.set(Some(loaded)),
                Err(PageError::AuthMissing) => auth.set(AuthState::signed_in(None)),
                Err(_) => {
                    form.set(Some(PreferencesForm::new(PreferenceOptionSet::default(), None)));
                    flash.error("Failed to load preference options");
                }
            }
        }
    });

    let save_services = services.clone();
    let save = move |_| {
        let Some(current) = form() else {
            return;
        };
        let services = save_services.clone();
        spawn(async move {
            saving.set(true);
            match services.controller().save_preferences(&current).await {
                Ok(message) => {
                    flash.success(message);
                    redirect.schedule(
                        Route::Notes {},
                        services.config.ui.preferences_redirect_delay(),
                    );
                }
                Err(e) => {
                    flash.error(e.for_action("Failed to save preferences"));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "profile-page",
            h1 { "Travel Preferences" }
            p {
                class: "tagline",
                "Trip plans are generated from these. Fill in at least a few of them."
            }

            FlashBanner { message: flash.current() }

            match form() {
                Some(current) => rsx! {
                    PreferencesFormView {
                        form: current,
                        saving: saving(),
                        on_change: move |next| form.set(Some(next)),
                        on_submit: save,
                    }
                },
                None => rsx! {
                    div { class: "loading", "Loading preferences..." }
                },
            }
        }
    }
}
