use dioxus::prelude::*;

use crate::state::NoteEditor;

/// The add/edit note form. Owns nothing; every keystroke goes out through `on_change`.
#[component]
pub fn NoteForm(
    editor: NoteEditor,
    #[props(default)] busy: bool,
    on_change: EventHandler<NoteEditor>,
    on_submit: EventHandler<NoteEditor>,
    on_cancel: EventHandler<()>,
) -> Element {
    let heading = editor.heading();
    let for_title = editor.clone();
    let for_content = editor.clone();
    let for_submit = editor.clone();

    rsx! {
        form {
            class: "note-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(for_submit.clone());
            },
            h2 { "{heading}" }
            div {
                class: "form-field",
                label { r#for: "note-title-input", "Title" }
                input {
                    id: "note-title-input",
                    r#type: "text",
                    placeholder: "e.g. Weekend in Lisbon",
                    value: "{editor.title}",
                    oninput: move |evt: FormEvent| {
                        let mut next = for_title.clone();
                        next.title = evt.value();
                        on_change.call(next);
                    },
                }
            }
            div {
                class: "form-field",
                label { r#for: "note-content-input", "Content" }
                textarea {
                    id: "note-content-input",
                    rows: 8,
                    placeholder: "Where, when, with whom, what you want to see...",
                    value: "{editor.content}",
                    oninput: move |evt: FormEvent| {
                        let mut next = for_content.clone();
                        next.content = evt.value();
                        on_change.call(next);
                    },
                }
            }
            div {
                class: "form-actions",
                button { class: "primary", r#type: "submit", disabled: busy, "Save" }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
