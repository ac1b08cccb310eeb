//! RSVP domain - the (user, event) attendance toggle

pub mod actions;
pub mod models;

pub use actions::ToggleOutcome;
pub use models::{Attendee, Rsvp};
