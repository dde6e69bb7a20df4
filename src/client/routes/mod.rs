mod home;
mod login;
mod moderator;
mod not_found;
mod organizer;
pub mod profile;
mod register;

pub use home::Home;
pub use login::Login;
pub use moderator::ModeratorDashboard;
pub use not_found::NotFound;
pub use organizer::OrganizerDashboard;
pub use profile::Profile;
pub use register::Register;
