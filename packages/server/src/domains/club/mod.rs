//! Club domain - club records and creation

pub mod actions;
pub mod models;

pub use models::Club;
