//! RSVP routes.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::common::ApiError;
use crate::domains::rsvp::{actions::toggle, Rsvp, ToggleOutcome};
use crate::domains::user::User;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub event_id: Option<i64>,
}

/// POST /api/rsvps - toggle the acting user's attendance.
///
/// 201 when the toggle added an RSVP, 200 when it removed one.
pub async fn toggle_rsvp(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let event_id = body
        .event_id
        .ok_or_else(|| ApiError::Validation("event_id is required".to_string()))?;

    let actor = User::find_by_id(auth.user_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let outcome = toggle(&actor, event_id, &state.db_pool).await?;
    let status = match outcome {
        ToggleOutcome::Added => StatusCode::CREATED,
        ToggleOutcome::Removed => StatusCode::OK,
    };

    Ok((status, Json(json!({ "status": outcome }))))
}

/// GET /api/rsvps/:event_id - attendees of an event
pub async fn list_attendees(
    Extension(state): Extension<AppState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id = event_id
        .parse::<i64>()
        .map_err(|_| ApiError::Validation("event id must be numeric".to_string()))?;

    let attendees = Rsvp::attendees(event_id, &state.db_pool).await?;
    Ok(Json(attendees))
}
