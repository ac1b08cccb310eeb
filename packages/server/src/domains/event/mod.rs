//! Event domain - club events that members RSVP to

pub mod models;

pub use models::Event;
