//! # Client configuration: `client.toml`
//!
//! Defines the TOML configuration the client reads at startup. It decides which
//! backend origin REST calls go to, which auth variant signs users in, and how long
//! the UI waits before its scheduled redirects.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                 # empty = same origin as the page
//!
//! [auth]
//! mode = "mock"                 # or "provider"
//! provider_url = ""
//! anon_key = ""
//!
//! [ui]
//! auth_redirect_delay_ms = 2000
//! login_redirect_delay_ms = 1000
//! preferences_redirect_delay_ms = 1500
//! reset_redirect_delay_ms = 2000
//! flash_timeout_ms = 5000
//! ```
//!
//! ## Environment overrides
//!
//! [`ClientConfig::with_overrides`] applies `API_BASE_URL`, `USE_MOCK_AUTH`,
//! `SUPABASE_URL` and `SUPABASE_ANON_KEY` on top of the parsed file. The lookup is a
//! closure so native builds can pass `std::env::var` and web builds compile-time values.
//!
//! All structs derive or implement `Default`, so a missing or empty file is the
//! default configuration: mock auth against the same origin.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Supabase configuration is missing. Please check environment variables.")]
    MissingProvider,
}

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin. Empty string means "same origin".
    #[serde(default)]
    pub base_url: String,
}

/// Which auth client variant to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Mock,
    Provider,
}

/// Auth client selection and provider credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,
    #[serde(default)]
    pub provider_url: String,
    #[serde(default)]
    pub anon_key: String,
}

/// Delays used by page controllers, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub auth_redirect_delay_ms: u64,
    pub login_redirect_delay_ms: u64,
    pub preferences_redirect_delay_ms: u64,
    pub reset_redirect_delay_ms: u64,
    pub flash_timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            auth_redirect_delay_ms: 2000,
            login_redirect_delay_ms: 1000,
            preferences_redirect_delay_ms: 1500,
            reset_redirect_delay_ms: 2000,
            flash_timeout_ms: 5000,
        }
    }
}

impl UiConfig {
    pub fn auth_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.auth_redirect_delay_ms)
    }

    pub fn login_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.login_redirect_delay_ms)
    }

    pub fn preferences_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.preferences_redirect_delay_ms)
    }

    pub fn reset_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.reset_redirect_delay_ms)
    }

    pub fn flash_timeout(&self) -> Duration {
        Duration::from_millis(self.flash_timeout_ms)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply environment-style overrides. Unset or blank variables leave the file value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(flag) = get("USE_MOCK_AUTH") {
            self.auth.mode = if flag.trim().eq_ignore_ascii_case("true") {
                AuthMode::Mock
            } else {
                AuthMode::Provider
            };
        }
        if let Some(url) = get("SUPABASE_URL") {
            self.auth.provider_url = url;
        }
        if let Some(key) = get("SUPABASE_ANON_KEY") {
            self.auth.anon_key = key;
        }
        self
    }

    /// Reject configurations the chosen auth variant cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.mode == AuthMode::Provider
            && (self.auth.provider_url.trim().is_empty() || self.auth.anon_key.trim().is_empty())
        {
            return Err(ConfigError::MissingProvider);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_file_is_default_mock_config() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.auth.mode, AuthMode::Mock);
        assert_eq!(config.ui.auth_redirect_delay(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ui_section_keeps_other_defaults() {
        let config = ClientConfig::from_toml("[ui]\nflash_timeout_ms = 10\n").unwrap();
        assert_eq!(config.ui.flash_timeout_ms, 10);
        assert_eq!(config.ui.login_redirect_delay_ms, 1000);
    }

    #[test]
    fn test_provider_mode_requires_credentials() {
        let config = ClientConfig::from_toml("[auth]\nmode = \"provider\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingProvider)));
    }

    #[test]
    fn test_overrides_apply_non_blank_values() {
        let env: HashMap<&str, &str> = [
            ("USE_MOCK_AUTH", "false"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("API_BASE_URL", "  "),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://localhost:8080\"\n")
            .unwrap()
            .with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.auth.mode, AuthMode::Provider);
        assert_eq!(config.auth.provider_url, "https://example.supabase.co");
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::default();
        config.auth.mode = AuthMode::Provider;
        let text = config.to_toml().unwrap();
        assert!(text.contains("mode = \"provider\""));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            ClientConfig::from_toml("[auth\nmode ="),
            Err(ConfigError::Parse(_))
        ));
    }
}
