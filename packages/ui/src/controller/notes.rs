use api::AuthClient;
use store::{Note, NoteId};

use super::Controller;
use crate::state::NoteEditor;
use crate::PageError;

impl<A: AuthClient> Controller<'_, A> {
    pub async fn load_notes(&self) -> Result<Vec<Note>, PageError> {
        let token = self.token().await?;
        self.api
            .list_notes(&token)
            .await
            .inspect_err(|e| tracing::error!("Error loading notes: {}", e))
            .map_err(Into::into)
    }

    /// Create or update from the editor, then refetch. Returns the server's message
    /// and the fresh list. The save stands even when the refetch fails.
    pub async fn save_note(
        &self,
        editor: &NoteEditor,
    ) -> Result<(String, Result<Vec<Note>, PageError>), PageError> {
        let draft = editor.draft()?;
        let token = self.token().await?;
        let saved = match editor.id {
            Some(id) => self.api.update_note(&token, id, &draft).await,
            None => self.api.create_note(&token, &draft).await,
        }
        .inspect_err(|e| tracing::error!("Error saving note: {}", e))?;

        let message = saved
            .message
            .unwrap_or_else(|| "Note saved successfully!".to_string());
        Ok((message, self.load_notes().await))
    }

    pub async fn delete_note(
        &self,
        id: NoteId,
    ) -> Result<(String, Result<Vec<Note>, PageError>), PageError> {
        let token = self.token().await?;
        let ack = self
            .api
            .delete_note(&token, id)
            .await
            .inspect_err(|e| tracing::error!("Error deleting note: {}", e))?;

        let message = ack
            .message
            .unwrap_or_else(|| "Note deleted successfully!".to_string());
        Ok((message, self.load_notes().await))
    }
}
