//! One note with its generated trip plans.

use dioxus::prelude::*;
use store::{Note, NoteId, PlanId, Rating};
use ui::components::{ConfirmDialog, GenerationPanel, ModalOverlay, NoteForm, TripPlanList};
use ui::state::{format_datetime, GenerationGate, NoteEditor, TripPlansState};
use ui::{use_auth, use_flash, use_services, AuthState, FlashBanner, PageError, RequireSession};

use super::AppHeader;
use crate::Route;

#[component]
pub fn TripPlanDetail(note_id: NoteId) -> Element {
    rsx! {
        AppHeader {}
        RequireSession {
            TripPlanPage { key: "{note_id}", note_id }
        }
    }
}

#[component]
fn TripPlanPage(note_id: NoteId) -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut flash = use_flash();
    let mut note = use_signal(|| Option::<Note>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut plans = use_signal(TripPlansState::default);
    let mut gate = use_signal(GenerationGate::default);
    let mut generating = use_signal(|| false);
    let mut editor = use_signal(|| Option::<NoteEditor>::None);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    let load_services = services.clone();
    use_future(move || {
        let services = load_services.clone();
        async move {
            match services.controller().load_detail(note_id).await {
                Ok(page) => {
                    match page.plans {
                        Ok(list) => plans.write().replace(list),
                        Err(_) => plans.write().fail(),
                    }
                    gate.set(page.gate);
                    note.set(Some(page.note));
                }
                Err(PageError::AuthMissing) => auth.set(AuthState::signed_in(None)),
                Err(e) => load_error.set(Some(e.for_action("Failed to load note"))),
            }
        }
    });

    let generate_services = services.clone();
    let generate = move |_| {
        let services = generate_services.clone();
        spawn(async move {
            generating.set(true);
            match services.controller().generate_plan(note_id).await {
                Ok(generation) => {
                    match generation.plans {
                        Ok(list) => plans.write().replace(list),
                        Err(_) => plans.write().fail(),
                    }
                    gate.set(generation.gate);
                    flash.success(generation.message);
                }
                Err(e) => flash.error(e.for_action("Failed to generate trip plan")),
            }
            generating.set(false);
        });
    };

    let rate_services = services.clone();
    let rate = move |(plan_id, rating): (PlanId, Rating)| {
        let services = rate_services.clone();
        spawn(async move {
            match services.controller().rate_plan(plan_id, rating).await {
                Ok(rating) => {
                    plans.write().apply_rating(plan_id, rating);
                }
                Err(e) => flash.error(e.for_action("Failed to rate trip plan")),
            }
        });
    };

    let save_services = services.clone();
    let save = move |draft: NoteEditor| {
        let services = save_services.clone();
        spawn(async move {
            saving.set(true);
            match services.controller().save_note(&draft).await {
                Ok((message, reloaded)) => {
                    match reloaded {
                        Ok(list) => {
                            if let Some(updated) = list.into_iter().find(|n| n.id == note_id) {
                                note.set(Some(updated));
                            }
                        }
                        Err(e) => tracing::warn!("Note saved but reload failed: {}", e),
                    }
                    editor.set(None);
                    flash.success(message);
                }
                Err(e) => flash.error(e.for_action("Failed to save note")),
            }
            saving.set(false);
        });
    };

    let delete_services = services.clone();
    let delete = move |_| {
        let services = delete_services.clone();
        spawn(async move {
            confirm_delete.set(false);
            match services.controller().delete_note(note_id).await {
                Ok(_) => {
                    nav.push(Route::Notes {});
                }
                Err(e) => flash.error(e.for_action("Failed to delete note")),
            }
        });
    };

    if let Some(error) = load_error() {
        return rsx! {
            div {
                class: "detail-page",
                div { class: "error", "{error}" }
                Link { to: Route::Notes {}, "Back to notes" }
            }
        };
    }
    let Some(current) = note() else {
        return rsx! {
            div { class: "loading", "Loading note..." }
        };
    };
    let created = format_datetime(&current.created_at);
    let updated = format_datetime(&current.updated_at);

    rsx! {
        div {
            class: "detail-page",
            Link { class: "back-link", to: Route::Notes {}, "← Back to notes" }

            FlashBanner { message: flash.current() }

            section {
                class: "note-detail",
                h1 { "{current.title}" }
                div { class: "note-meta", "Created: {created} | Last updated: {updated}" }
                div { class: "note-content full", "{current.content}" }
                div {
                    class: "button-row",
                    button {
                        class: "secondary",
                        onclick: {
                            let current = current.clone();
                            move |_| editor.set(Some(NoteEditor::edit(&current)))
                        },
                        "Edit"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| confirm_delete.set(true),
                        "Delete"
                    }
                }
            }

            section {
                class: "trip-plans",
                h2 { "Trip Plans" }
                GenerationPanel {
                    gate: gate(),
                    generating: generating(),
                    on_generate: generate,
                }
                if !plans.read().loaded {
                    div { class: "loading", "Loading trip plans..." }
                } else {
                    TripPlanList {
                        state: plans(),
                        on_rate: rate,
                        on_hover: move |(plan_id, rating): (PlanId, Rating)| {
                            plans.write().hover(plan_id, rating)
                        },
                        on_leave: move |plan_id: PlanId| plans.write().unhover(plan_id),
                    }
                }
            }

            if let Some(draft) = editor() {
                ModalOverlay {
                    on_close: move |_| editor.set(None),
                    NoteForm {
                        editor: draft,
                        busy: saving(),
                        on_change: move |next| editor.set(Some(next)),
                        on_submit: save,
                        on_cancel: move |_| editor.set(None),
                    }
                }
            }

            if confirm_delete() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this note?",
                    on_confirm: delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }
        }
    }
}
