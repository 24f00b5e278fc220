use dioxus::prelude::*;

use store::{ClientConfig, NoteId};
use ui::{AuthProvider, ServicesProvider};
use views::{
    ForgotPassword, Landing, Login, NotFound, Notes, Profile, Register, ResetPassword,
    TripPlanDetail,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/app")]
    Notes {},
    #[route("/app/notes/:note_id")]
    TripPlanDetail { note_id: NoteId },
    #[route("/profile")]
    Profile {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CLIENT_TOML: &str = include_str!("../client.toml");

fn main() {
    dioxus::launch(App);
}

/// `client.toml` as bundled, with environment overrides applied. Native builds read
/// the process environment (and `.env`); web builds take whatever was set at
/// compile time.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CLIENT_TOML).unwrap_or_else(|e| {
        tracing::error!("Falling back to default config: {}", e);
        ClientConfig::default()
    });

    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        config.with_overrides(|key| std::env::var(key).ok())
    }
    #[cfg(target_arch = "wasm32")]
    {
        config.with_overrides(|key| {
            let value = match key {
                "API_BASE_URL" => option_env!("API_BASE_URL"),
                "USE_MOCK_AUTH" => option_env!("USE_MOCK_AUTH"),
                "SUPABASE_URL" => option_env!("SUPABASE_URL"),
                "SUPABASE_ANON_KEY" => option_env!("SUPABASE_ANON_KEY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider {
            config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
