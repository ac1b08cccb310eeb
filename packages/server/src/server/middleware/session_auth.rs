use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header::COOKIE, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::common::auth::{SessionStore, SESSION_TTL_HOURS};
use crate::common::ApiError;

/// Name of the session cookie set on login/registration
pub const SESSION_COOKIE: &str = "hub_session";

/// Authenticated user information resolved from the session cookie
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Middleware to extract the session cookie and populate the auth user.
///
/// This middleware:
/// 1. Extracts the session token from the Cookie header
/// 2. Resolves it against the SessionStore
/// 3. Stores AuthUser in request extensions
///
/// Note: This middleware does NOT block requests - it only extracts auth
/// info. Handlers that need an acting user require it via the [`AuthUser`]
/// extractor, which rejects with 401 when the extension is missing.
pub async fn session_auth_middleware(
    sessions: Arc<SessionStore>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(request.headers()) {
        if let Some(user_id) = sessions.resolve(&token).await {
            request.extensions_mut().insert(AuthUser { user_id });
        }
    }

    next.run(request).await
}

/// Pull the session token out of a request's Cookie header
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value for a fresh session (24h, matching the registry TTL)
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}",
        SESSION_COOKIE,
        token,
        SESSION_TTL_HOURS * 3600
    )
}

/// Set-Cookie value that expires the session cookie client-side
pub fn clear_session_cookie() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0", SESSION_COOKIE)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }
}
