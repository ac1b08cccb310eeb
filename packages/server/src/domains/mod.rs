// Business domains
pub mod club;
pub mod event;
pub mod membership;
pub mod rsvp;
pub mod user;
