//! Platform wiring for the REST and auth clients.
//!
//! Sessions persist in a [`store::KeyValueStore`] picked per platform:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalStorageStore`]
//! - **Desktop / Mobile** (native): files under `<data_dir>/travel-notes/` via [`store::FileStore`]
//! - **WASM without `web`**: in memory, gone on reload

use std::rc::Rc;

use api::{ApiClient, AuthBackend};
use dioxus::prelude::*;
use store::{ClientConfig, ConfigError};

use crate::controller::Controller;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("travel-notes");
        store::FileStore::new(base)
    }
}

/// Backend origin. An empty setting means the page's own origin on the web and the
/// local development server everywhere else.
pub fn resolve_base_url(config: &ClientConfig) -> String {
    let configured = config.api.base_url.trim();
    if !configured.is_empty() {
        return configured.to_string();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    "http://localhost:8080".to_string()
}

/// Everything pages need to reach the outside world, provided once at the root.
#[derive(Clone)]
pub struct AppServices {
    pub auth: Rc<AuthBackend<PlatformStore>>,
    pub api: ApiClient,
    pub config: Rc<ClientConfig>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth) && Rc::ptr_eq(&self.config, &other.config)
    }
}

impl AppServices {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let base_url = resolve_base_url(&config);
        tracing::info!("Backend at {}", base_url);
        let auth = AuthBackend::from_config(&config, &base_url, platform_store())?;
        Ok(Self {
            auth: Rc::new(auth),
            api: ApiClient::new(base_url),
            config: Rc::new(config),
        })
    }

    pub fn controller(&self) -> Controller<'_, AuthBackend<PlatformStore>> {
        Controller::new(&self.auth, &self.api)
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Builds [`AppServices`] from `config` and provides them to `children`. A config
/// the auth client cannot start with renders the error instead.
#[component]
pub fn ServicesProvider(config: ClientConfig, children: Element) -> Element {
    let services = use_hook(|| AppServices::new(config.clone()).map_err(|e| e.to_string()));

    match services {
        Ok(services) => rsx! {
            ServicesScope { services, {children} }
        },
        Err(message) => {
            tracing::error!("Cannot start: {}", message);
            rsx! {
                div { class: "error", "{message}" }
            }
        }
    }
}

#[component]
fn ServicesScope(services: AppServices, children: Element) -> Element {
    use_context_provider(|| services);
    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_url_wins() {
        let mut config = ClientConfig::default();
        config.api.base_url = " http://api.example.com ".into();
        assert_eq!(resolve_base_url(&config), "http://api.example.com");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_default_base_url() {
        assert_eq!(resolve_base_url(&ClientConfig::default()), "http://localhost:8080");
    }
}
