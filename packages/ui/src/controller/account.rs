use api::{password, AuthClient, AuthResponse, Credentials, Session};

use super::Controller;
use crate::PageError;

/// How a registration ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The variant issued a usable session straight away.
    SignedIn(Session),
    /// The provider wants the address confirmed first.
    ConfirmEmail,
}

impl<A: AuthClient> Controller<'_, A> {
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, PageError> {
        let response = self
            .auth
            .sign_in_with_password(&Credentials::new(email.trim(), password))
            .await
            .inspect_err(|e| tracing::error!("[AUTH] Login failed: {}", e))?;
        tracing::info!("[AUTH] Login successful");
        Ok(response)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<RegisterOutcome, PageError> {
        if password != confirm {
            return Err(PageError::validation("Passwords do not match"));
        }
        let response = self
            .auth
            .sign_up(&Credentials::new(email.trim(), password))
            .await
            .inspect_err(|e| tracing::error!("[AUTH] Registration failed: {}", e))?;
        tracing::info!("[AUTH] Registration successful");
        Ok(match response.session {
            Some(session) => RegisterOutcome::SignedIn(session),
            None => RegisterOutcome::ConfirmEmail,
        })
    }

    /// Sign out. Never fails; the local session is gone afterwards either way.
    pub async fn sign_out(&self) {
        if let Err(e) = self.auth.sign_out().await {
            tracing::warn!("Logout warning: {}", e);
        }
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<String, PageError> {
        self.api
            .request_password_reset(email.trim())
            .await
            .inspect_err(|e| tracing::error!("Reset request failed: {}", e))?;
        Ok("Password reset email sent! Please check your inbox.".to_string())
    }

    /// `fragment` is the page URL's `#...` part carrying the provider's token.
    pub async fn reset_password(
        &self,
        new_password: &str,
        confirm: &str,
        fragment: &str,
    ) -> Result<String, PageError> {
        if new_password != confirm {
            return Err(PageError::validation("Passwords do not match"));
        }
        let token = password::access_token_from_fragment(fragment)
            .ok_or_else(|| PageError::validation("Invalid or missing reset token"))?;
        self.api
            .update_password(&token, new_password)
            .await
            .inspect_err(|e| tracing::error!("Password update failed: {}", e))?;
        Ok("Password reset successful! Redirecting to login...".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::Harness;
    use api::auth::ProviderAuthClient;
    use store::MemoryStore;

    #[tokio::test]
    async fn test_sign_in_then_session_matches() {
        let harness = Harness::anonymous().await;
        let controller = harness.controller();
        assert_eq!(controller.current_session().await, None);

        let response = controller.sign_in(" admin@test.com ", "admin").await.unwrap();
        let issued = response.session.unwrap();
        let current = controller.current_session().await.unwrap();
        assert_eq!(current.access_token, issued.access_token);
        assert_eq!(current.user.email, "admin@test.com");
    }

    #[tokio::test]
    async fn test_bad_login_surfaces_backend_message() {
        let harness = Harness::anonymous().await;
        let err = harness
            .controller()
            .sign_in("user@test.com", "nope")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email or password is incorrect");
        assert_eq!(harness.controller().current_session().await, None);
    }

    #[tokio::test]
    async fn test_register_checks_confirmation_before_network() {
        let harness = Harness::anonymous().await;
        let controller = harness.controller();

        let err = controller
            .register("someone@test.com", "secret", "secre7")
            .await
            .unwrap_err();
        assert_eq!(err, PageError::validation("Passwords do not match"));
        assert!(!harness.backend.state().users.contains_key("someone@test.com"));

        let outcome = controller
            .register("someone@test.com", "secret", "secret")
            .await
            .unwrap();
        assert!(matches!(outcome, RegisterOutcome::SignedIn(ref s) if s.user.email == "someone@test.com"));
    }

    #[tokio::test]
    async fn test_register_awaiting_confirmation() {
        let harness = Harness::anonymous().await;
        harness.backend.state().confirm_signups = true;
        let anon_key = harness.backend.state().anon_key.clone();
        let auth = ProviderAuthClient::new(harness.backend.base_url(), &anon_key, MemoryStore::new());
        let controller = Controller::new(&auth, &harness.api);

        let outcome = controller
            .register(" traveller@test.com ", "secret", "secret")
            .await
            .unwrap();
        assert_eq!(outcome, RegisterOutcome::ConfirmEmail);
        assert_eq!(auth.get_session().await, Ok(None));
        assert_eq!(controller.current_session().await, None);
        assert!(harness.backend.state().users.contains_key("traveller@test.com"));

        harness.backend.state().confirm_signups = false;
        let outcome = controller
            .register("second@test.com", "secret", "secret")
            .await
            .unwrap();
        assert!(matches!(outcome, RegisterOutcome::SignedIn(ref s) if s.user.email == "second@test.com"));
    }

    #[tokio::test]
    async fn test_sign_out_survives_backend_failure() {
        let harness = Harness::signed_in().await;
        harness.backend.state().fail_logout = true;
        let controller = harness.controller();

        controller.sign_out().await;
        assert_eq!(controller.current_session().await, None);
    }

    #[tokio::test]
    async fn test_password_reset_flow() {
        let harness = Harness::anonymous().await;
        let controller = harness.controller();

        let sent = controller.request_password_reset("user@test.com").await.unwrap();
        assert_eq!(sent, "Password reset email sent! Please check your inbox.");

        let err = controller
            .reset_password("newpass1", "newpass2", "#access_token=abc")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");

        let err = controller
            .reset_password("newpass1", "newpass1", "#type=recovery")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid or missing reset token");

        controller
            .reset_password("newpass1", "newpass1", "#access_token=abc&type=recovery")
            .await
            .unwrap();
        assert_eq!(
            harness.backend.state().password_updates,
            vec![("abc".to_string(), "newpass1".to_string())]
        );
    }
}
