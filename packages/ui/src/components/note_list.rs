use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use store::{Note, NoteId};

use crate::state::{content_preview, format_date};

/// The user's notes, newest data as fetched. Clicking a card opens it.
#[component]
pub fn NoteList(
    notes: Vec<Note>,
    on_open: EventHandler<NoteId>,
    on_edit: EventHandler<NoteId>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    if notes.is_empty() {
        return rsx! {
            div {
                class: "empty-notes",
                "No notes yet. Click \"Add Note\" to create your first travel note!"
            }
        };
    }

    rsx! {
        div {
            class: "notes-list",
            for note in notes {
                NoteCard {
                    key: "{note.id}",
                    note: note.clone(),
                    on_open,
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn NoteCard(
    note: Note,
    on_open: EventHandler<NoteId>,
    on_edit: EventHandler<NoteId>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let id = note.id;
    let preview = content_preview(&note.content);
    let created = format_date(&note.created_at);
    let updated = format_date(&note.updated_at);

    rsx! {
        div {
            class: "note-item",
            onclick: move |_| on_open.call(id),
            h3 { "{note.title}" }
            div { class: "note-content", "{preview}" }
            div { class: "note-meta", "Created: {created} | Last updated: {updated}" }
            div {
                class: "note-actions",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "edit-btn",
                    onclick: move |_| on_edit.call(id),
                    Icon { width: 12, height: 12, fill: "currentColor", icon: FaPen }
                    " Edit"
                }
                button {
                    class: "delete-btn",
                    onclick: move |_| on_delete.call(id),
                    Icon { width: 12, height: 12, fill: "currentColor", icon: FaTrash }
                    " Delete"
                }
            }
        }
    }
}
