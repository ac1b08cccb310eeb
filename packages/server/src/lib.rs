// HubConnect - API Core
//
// This crate provides the backend API for a club-management platform:
// members register, join clubs, create and RSVP to events, and officers
// approve membership requests. Architecture follows domain-driven design.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
