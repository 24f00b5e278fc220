//! Per-page view-models.
//!
//! Each page owns its state in a signal and hands it to components by value. The
//! types here never perform I/O; controllers fetch, these structs hold and derive.

mod notes;
mod preferences;
mod trip_plans;

pub use notes::{content_preview, format_date, format_datetime, NoteEditor, NotesState, PREVIEW_CHARS};
pub use preferences::{MultiChoice, PreferencesForm, SingleChoice};
pub use trip_plans::{GenerationGate, Star, TripPlansState};
