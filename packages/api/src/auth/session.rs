//! Session data types.

use serde::{Deserialize, Serialize};

/// Storage key for the mock client's session blob.
pub const MOCK_SESSION_KEY: &str = "mock_session";

/// Storage key for the provider client's session.
pub const PROVIDER_SESSION_KEY: &str = "provider_session";

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// An authenticated browser context: the bearer token and who it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

/// The mock client's persisted value: the sign-in response, minus the duplicate token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub session: Option<Session>,
}
