//! Account routes: login, register, logout, and the /api/me pair.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::common::auth::digest_password;
use crate::common::ApiError;
use crate::domains::membership::actions::rename_cascade;
use crate::domains::user::{User, UserData};
use crate::server::app::AppState;
use crate::server::middleware::{
    clear_session_cookie, session_cookie, session_token, AuthUser,
};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login
pub async fn login(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let email = require_field(body.email, "email")?;
    let password = require_field(body.password, "password")?;

    let user = User::find_by_email(&email, &state.db_pool)
        .await?
        .filter(|u| u.password_digest == digest_password(&password))
        .ok_or(ApiError::Unauthenticated)?;

    let token = state.sessions.create(user.id).await;
    tracing::info!(user_id = user.id, "User logged in");

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, session_cookie(&token))],
        Json(json!({ "user": UserData::from(user) })),
    ))
}

/// POST /api/register
pub async fn register(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let name = require_field(body.name, "name")?;
    let email = require_field(body.email, "email")?;
    let password = require_field(body.password, "password")?;

    // The unique index on email is authoritative; racing registrations
    // surface as a Conflict from the insert.
    let user = User::insert(&name, &email, &digest_password(&password), &state.db_pool)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict("Email already registered".to_string()),
            other => other,
        })?;

    let token = state.sessions.create(user.id).await;
    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, session_cookie(&token))],
        Json(json!({ "user": UserData::from(user) })),
    ))
}

/// POST /api/logout
///
/// Works with or without a live session: the cookie is cleared either way
/// and revoking an unknown token is a no-op.
pub async fn logout(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.sessions.revoke(&token).await;
    }

    (
        StatusCode::OK,
        [(SET_COOKIE, clear_session_cookie())],
        Json(json!({ "message": "Logged out" })),
    )
}

/// GET /api/me
pub async fn me(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let user = User::find_by_id(auth.user_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({ "user": UserData::from(user) })))
}

/// PUT /api/me
///
/// Profile update. A display-name change cascades into the roster, which
/// stores names rather than user ids. The user update and the cascade are
/// independent sequential writes: if the cascade fails the profile change
/// stands and the caller sees a 500.
pub async fn update_me(
    auth: AuthUser,
    Extension(state): Extension<AppState>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let name = require_field(body.name, "name")?;
    let email = require_field(body.email, "email")?;
    let digest = body.password.as_deref().map(digest_password);

    let current = User::find_by_id(auth.user_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let updated = User::update_profile(
        auth.user_id,
        &name,
        &email,
        digest.as_deref(),
        &state.db_pool,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if current.name != updated.name {
        rename_cascade(&current.name, &updated.name, &state.db_pool).await?;
    }

    Ok(Json(json!({ "user": UserData::from(updated) })))
}

fn require_field(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("{} is required", field))),
    }
}
