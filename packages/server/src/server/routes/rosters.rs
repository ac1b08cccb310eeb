//! Roster routes: join requests and officer decisions.
//!
//! Path ids arrive as strings and are parsed here; a non-numeric id is a
//! 400 before any query runs. On the `:id` route, GET reads a club's roster
//! while PUT/DELETE address a single roster entry - the shape the legacy
//! API exposed.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::common::ApiError;
use crate::domains::membership::{
    actions::{decide, remove, request_join},
    Membership, MembershipRole, MembershipStatus,
};
use crate::domains::user::User;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
pub struct JoinRequest {
    pub club_id: Option<i64>,
    pub member_name: Option<String>,
}

#[derive(Deserialize)]
pub struct DecisionRequest {
    pub mem_status: Option<String>,
    pub mem_role: Option<String>,
}

/// GET /api/rosters/:club_id - roster for a club, pending entries first
pub async fn list_roster(
    Extension(state): Extension<AppState>,
    Path(club_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_id(&club_id, "club id")?;
    let roster = Membership::list_for_club(club_id, &state.db_pool).await?;
    Ok(Json(roster))
}

/// POST /api/rosters - request to join a club (creates a pending entry)
pub async fn create_roster(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let club_id = body
        .club_id
        .ok_or_else(|| ApiError::Validation("club_id is required".to_string()))?;

    let actor = acting_user(&auth, &state).await?;
    let membership = request_join(&actor, club_id, body.member_name, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(json!({ "roster": membership }))))
}

/// PUT /api/rosters/:id - officer decision on a roster entry
pub async fn decide_roster(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let membership_id = parse_id(&id, "roster id")?;
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    // PUT only approves; rejection is DELETE. Same rule `decide` enforces,
    // checked here so a bad status never reaches the state machine.
    let status = body
        .mem_status
        .as_deref()
        .and_then(MembershipStatus::parse)
        .filter(|s| *s == MembershipStatus::Active)
        .ok_or_else(|| {
            ApiError::Validation(
                "mem_status must be 'active'; reject by deleting the roster entry".to_string(),
            )
        })?;

    let role = match body.mem_role.as_deref() {
        None => MembershipRole::Member,
        Some(raw) => MembershipRole::parse(raw).ok_or_else(|| {
            ApiError::Validation("mem_role must be 'member' or 'officer'".to_string())
        })?,
    };

    let actor = acting_user(&auth, &state).await?;
    let updated = decide(&actor, membership_id, status, role, &state.db_pool).await?;

    Ok(Json(json!({ "roster": updated })))
}

/// DELETE /api/rosters/:id - reject a request or remove a member
pub async fn remove_roster(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let membership_id = parse_id(&id, "roster id")?;

    let actor = acting_user(&auth, &state).await?;
    remove(&actor, membership_id, &state.db_pool).await?;

    Ok(Json(json!({ "message": "Roster entry removed" })))
}

async fn acting_user(auth: &AuthUser, state: &AppState) -> Result<User, ApiError> {
    User::find_by_id(auth.user_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::Validation(format!("{} must be numeric", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "roster id").unwrap(), 42);
        assert!(parse_id("abc", "roster id").is_err());
        assert!(parse_id("", "roster id").is_err());
        assert!(parse_id("4.2", "roster id").is_err());
    }
}
