//! RSVP toggle action

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::event::Event;
use crate::domains::rsvp::models::Rsvp;
use crate::domains::user::User;

/// Result of a toggle: the pair law is that two consecutive toggles for the
/// same (user, event) return Added then Removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Flip the acting user's attendance for an event.
///
/// Delete-if-present, insert otherwise. The delete settles which side of the
/// toggle we are on; a racing double-insert past it is stopped by the unique
/// constraint and surfaces as a Conflict rather than a duplicate row.
pub async fn toggle(actor: &User, event_id: i64, pool: &PgPool) -> Result<ToggleOutcome, ApiError> {
    if Rsvp::delete_pair(event_id, actor.id, pool).await? {
        info!(event_id, user_id = actor.id, "RSVP removed");
        return Ok(ToggleOutcome::Removed);
    }

    if Event::find_by_id(event_id, pool).await?.is_none() {
        return Err(ApiError::NotFound(format!("Event {} not found", event_id)));
    }

    Rsvp::insert(event_id, actor.id, pool).await?;
    info!(event_id, user_id = actor.id, "RSVP added");
    Ok(ToggleOutcome::Added)
}
