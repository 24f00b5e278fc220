use api::{ApiError, AuthError};
use thiserror::Error;

/// Why a page action stopped. Shown to the user as-is through `Display`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    /// No stored session. Authenticated pages answer this by redirecting to login.
    #[error("No session found. Please log in again.")]
    AuthMissing,
    /// A client-side check failed before anything was sent.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl PageError {
    pub fn validation(message: impl Into<String>) -> Self {
        PageError::Validation(message.into())
    }

    /// User-facing line for a failed action, e.g. `"Failed to save note: Note not found"`.
    /// Validation messages already say what went wrong and are shown bare.
    pub fn for_action(&self, failed: &str) -> String {
        match self {
            PageError::Validation(message) => message.clone(),
            other => format!("{failed}: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PageError::AuthMissing.to_string(),
            "No session found. Please log in again."
        );
        let server = PageError::from(ApiError::Server {
            status: 404,
            message: "Note not found".into(),
        });
        assert_eq!(server.for_action("Failed to save note"), "Failed to save note: Note not found");
        assert_eq!(
            PageError::validation("Passwords do not match").for_action("Failed to register"),
            "Passwords do not match"
        );
        assert_eq!(
            PageError::from(AuthError::new("Email or password is incorrect")).to_string(),
            "Email or password is incorrect"
        );
    }
}
