//! Error types returned by REST calls and auth operations.

use thiserror::Error;

/// Failure of a call against the backend REST API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection reset, CORS...).
    #[error("network request failed: {0}")]
    Transport(String),
    /// Non-OK status or `success: false`. `message` is the body's message when it had one.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The body was not the shape this endpoint returns.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Failure of an auth operation. Carries a user-facing message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::new(e.to_string())
    }
}
