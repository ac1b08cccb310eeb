//! Event routes.

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::common::ApiError;
use crate::domains::event::Event;
use crate::server::app::AppState;

/// GET /api/events - upcoming events, soonest first
pub async fn list_events(
    Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let events = Event::list(&state.db_pool).await?;
    Ok(Json(events))
}
