//! Presentational components. They render what they are given and report user
//! actions through event handlers; none of them fetch anything.

mod generation_panel;
mod modal;
mod note_form;
mod note_list;
mod preferences_form;
mod star_rating;
mod trip_plan_list;

pub use generation_panel::GenerationPanel;
pub use modal::{ConfirmDialog, ModalOverlay};
pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use preferences_form::PreferencesFormView;
pub use star_rating::StarRating;
pub use trip_plan_list::TripPlanList;
