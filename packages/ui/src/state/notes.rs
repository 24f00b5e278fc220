//! View-model for the notes list and the note editor.

use chrono::NaiveDateTime;
use store::{Note, NoteDraft, NoteId};

use crate::PageError;

/// Longest content preview shown in the list, in characters.
pub const PREVIEW_CHARS: usize = 150;

/// First [`PREVIEW_CHARS`] characters of `content`, with `...` when cut.
pub fn content_preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Notes as last fetched, plus the delete awaiting confirmation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub loaded: bool,
    pub error: Option<String>,
    pub pending_delete: Option<NoteId>,
}

impl NotesState {
    /// Swap in a freshly fetched list. Clears any load error and pending delete.
    pub fn replace(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.loaded = true;
        self.error = None;
        self.pending_delete = None;
    }

    /// Record a failed load. The previous list stays.
    pub fn fail(&mut self, error: &PageError) {
        self.loaded = true;
        self.error = Some(format!("Failed to load notes: {error}"));
    }

    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn request_delete(&mut self, id: NoteId) {
        if self.find(id).is_some() {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Apply the refetch that follows a save or delete the server already accepted.
    pub fn reloaded(&mut self, result: Result<Vec<Note>, PageError>) {
        match result {
            Ok(notes) => self.replace(notes),
            Err(e) => {
                self.pending_delete = None;
                self.fail(&e);
            }
        }
    }
}

/// The add/edit form. `id` is `None` when adding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteEditor {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
}

impl NoteEditor {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.id.is_some() {
            "Edit Note"
        } else {
            "Add New Note"
        }
    }

    /// Trimmed request body. Both fields must be non-blank.
    pub fn draft(&self) -> Result<NoteDraft, PageError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(PageError::validation(
                "Please fill in both title and content",
            ));
        }
        Ok(NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: NoteId, title: &str) -> Note {
        let at = NaiveDateTime::parse_from_str("2024-05-01 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Note {
            id,
            title: title.into(),
            content: "content".into(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_preview_cuts_at_150_chars() {
        assert_eq!(content_preview("short"), "short");

        let exact = "a".repeat(150);
        assert_eq!(content_preview(&exact), exact);

        let long = "é".repeat(151);
        let preview = content_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 153);
    }

    #[test]
    fn test_dates() {
        let n = note(1, "x");
        assert_eq!(format_date(&n.created_at), "2024-05-01");
        assert_eq!(format_datetime(&n.created_at), "2024-05-01 09:30");
    }

    #[test]
    fn test_failed_reload_keeps_list() {
        let mut state = NotesState::default();
        state.replace(vec![note(1, "Rome"), note(2, "Oslo")]);
        state.request_delete(2);
        assert_eq!(state.pending_delete, Some(2));

        state.fail(&PageError::validation("boom"));
        assert_eq!(state.notes.len(), 2);
        assert_eq!(state.error.as_deref(), Some("Failed to load notes: boom"));

        state.replace(vec![note(1, "Rome")]);
        assert_eq!(state.pending_delete, None);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_delete_of_unknown_note_is_ignored() {
        let mut state = NotesState::default();
        state.replace(vec![note(1, "Rome")]);
        state.request_delete(9);
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn test_editor_heading_and_validation() {
        let editor = NoteEditor::create();
        assert_eq!(editor.heading(), "Add New Note");
        assert_eq!(
            editor.draft(),
            Err(PageError::validation("Please fill in both title and content"))
        );

        let mut editor = NoteEditor::edit(&note(4, "Rome"));
        assert_eq!(editor.heading(), "Edit Note");
        editor.title = "  Rome  ".into();
        editor.content = " Forum\n".into();
        let draft = editor.draft().unwrap();
        assert_eq!((draft.title.as_str(), draft.content.as_str()), ("Rome", "Forum"));

        editor.content = "   ".into();
        assert!(editor.draft().is_err());
    }

    #[test]
    fn test_failed_reload_after_delete() {
        let mut state = NotesState::default();
        state.replace(vec![note(1, "Rome"), note(2, "Oslo")]);
        state.request_delete(2);

        state.reloaded(Err(PageError::validation("db down")));
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.error.as_deref(), Some("Failed to load notes: db down"));

        state.reloaded(Ok(vec![note(1, "Rome")]));
        assert_eq!(state.error, None);
        assert_eq!(state.notes.len(), 1);
    }
}
