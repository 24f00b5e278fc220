//! This crate contains all shared UI for the workspace: view-models, page
//! controllers, the auth context and the components pages are built from.

pub mod components;
pub mod controller;
pub mod state;

mod error;
pub use error::PageError;

mod services;
pub use services::{
    platform_store, resolve_base_url, use_services, AppServices, PlatformStore, ServicesProvider,
};

mod timed;
pub use timed::{
    sleep, use_delayed_redirect, use_flash, DelayedRedirect, Flash, FlashBanner, FlashKind,
    FlashMessage,
};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, RequireSession};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
