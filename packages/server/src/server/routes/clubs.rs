//! Club routes.
//!
//! Club creation lives here rather than in pass-through CRUD because it
//! carries a guaranteed side effect: the creator is seated as an active
//! officer of the new club.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::common::ApiError;
use crate::domains::club::{actions::create_club, Club};
use crate::domains::user::User;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
pub struct CreateClubRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub glyph: String,
}

/// GET /api/clubs
pub async fn list_clubs(
    Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let clubs = Club::list(&state.db_pool).await?;
    Ok(Json(clubs))
}

/// POST /api/clubs
pub async fn create_club_handler(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
    payload: Result<Json<CreateClubRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let name = body
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("name is required".to_string()))?;

    let creator = User::find_by_id(auth.user_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let club = create_club(
        &creator,
        &name,
        &body.description,
        &body.category,
        &body.glyph,
        &state.db_pool,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "club": club }))))
}
