//! Membership domain - the roster state machine
//!
//! Governs transitions of a (user, club) pair among absent, pending,
//! active-member, and officer. All Membership row writes in the system go
//! through [`actions`].

pub mod actions;
pub mod models;

pub use models::{Membership, MembershipRole, MembershipStatus};
