//! The notes list: add, edit and delete travel notes.

use dioxus::prelude::*;
use store::NoteId;
use ui::components::{ConfirmDialog, ModalOverlay, NoteForm, NoteList};
use ui::state::{NoteEditor, NotesState};
use ui::{use_auth, use_flash, use_services, AuthState, FlashBanner, PageError, RequireSession};

use super::AppHeader;
use crate::Route;

#[component]
pub fn Notes() -> Element {
    rsx! {
        AppHeader {}
        RequireSession {
            NotesPage {}
        }
    }
}

#[component]
fn NotesPage() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut notes = use_signal(NotesState::default);
    let mut editor = use_signal(|| Option::<NoteEditor>::None);
    let mut saving = use_signal(|| false);

    let load_services = services.clone();
    use_future(move || {
        let services = load_services.clone();
        async move {
            match services.controller().load_notes().await {
                Ok(list) => notes.write().replace(list),
                Err(PageError::AuthMissing) => auth.set(AuthState::signed_in(None)),
                Err(e) => notes.write().fail(&e),
            }
        }
    });

    let save_services = services.clone();
    let save = move |draft: NoteEditor| {
        let services = save_services.clone();
        spawn(async move {
            saving.set(true);
            match services.controller().save_note(&draft).await {
                Ok((message, reloaded)) => {
                    notes.write().reloaded(reloaded);
                    editor.set(None);
                    flash.success(message);
                }
                Err(e) => flash.error(e.for_action("Failed to save note")),
            }
            saving.set(false);
        });
    };

    let delete_services = services.clone();
    let confirm_delete = move |_| {
        let Some(id) = notes.peek().pending_delete else {
            return;
        };
        let services = delete_services.clone();
        spawn(async move {
            match services.controller().delete_note(id).await {
                Ok((message, reloaded)) => {
                    notes.write().reloaded(reloaded);
                    flash.success(message);
                }
                Err(e) => {
                    notes.write().cancel_delete();
                    flash.error(e.for_action("Failed to delete note"));
                }
            }
        });
    };

    let state = notes();

    rsx! {
        div {
            class: "notes-page",
            div {
                class: "page-heading",
                h1 { "My Travel Notes" }
                button {
                    class: "primary",
                    onclick: move |_| editor.set(Some(NoteEditor::create())),
                    "+ Add Note"
                }
            }

            FlashBanner { message: flash.current() }

            if !state.loaded {
                div { class: "loading", "Loading notes..." }
            } else if let Some(error) = &state.error {
                div { class: "error", "{error}" }
            } else {
                NoteList {
                    notes: state.notes.clone(),
                    on_open: move |id: NoteId| {
                        nav.push(Route::TripPlanDetail { note_id: id });
                    },
                    on_edit: move |id: NoteId| {
                        if let Some(note) = notes.peek().find(id) {
                            editor.set(Some(NoteEditor::edit(note)));
                        }
                    },
                    on_delete: move |id: NoteId| notes.write().request_delete(id),
                }
            }

            if let Some(current) = editor() {
                ModalOverlay {
                    on_close: move |_| editor.set(None),
                    NoteForm {
                        editor: current,
                        busy: saving(),
                        on_change: move |next| editor.set(Some(next)),
                        on_submit: save,
                        on_cancel: move |_| editor.set(None),
                    }
                }
            }

            if state.pending_delete.is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this note?",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| notes.write().cancel_delete(),
                }
            }
        }
    }
}
