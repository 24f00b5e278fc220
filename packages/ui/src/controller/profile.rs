use api::AuthClient;

use super::Controller;
use crate::state::PreferencesForm;
use crate::PageError;

impl<A: AuthClient> Controller<'_, A> {
    /// Options plus saved choices. Having none saved yet is normal; failing to read
    /// them is logged and shows the empty form.
    pub async fn load_profile(&self) -> Result<PreferencesForm, PageError> {
        let token = self.token().await?;
        let options = self
            .api
            .preference_options(&token)
            .await
            .inspect_err(|e| tracing::error!("Error loading options: {}", e))?;

        let saved = match self.api.preferences(&token).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!("Error loading existing preferences: {}", e);
                None
            }
        };
        Ok(PreferencesForm::new(options, saved.as_ref()))
    }

    pub async fn save_preferences(&self, form: &PreferencesForm) -> Result<String, PageError> {
        let token = self.token().await?;
        self.api
            .save_preferences(&token, &form.to_preferences())
            .await
            .inspect_err(|e| tracing::error!("Error saving preferences: {}", e))?;
        Ok("Preferences saved successfully! Redirecting...".to_string())
    }
}
