mod header;
pub use header::AppHeader;

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod notes;
pub use notes::Notes;

mod trip_plan_detail;
pub use trip_plan_detail::TripPlanDetail;

mod profile;
pub use profile::Profile;

mod password;
pub use password::{ForgotPassword, ResetPassword};

mod not_found;
pub use not_found::NotFound;
