use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for the HubConnect API.
///
/// Every handler and domain action resolves to one of these variants; the
/// `IntoResponse` impl turns each into a JSON `{"error": ...}` body with the
/// matching status, so no error escapes as a bare text fallback or a crash.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // Uniqueness violations are the authoritative guard against
            // check-then-insert races (duplicate join requests, racing RSVPs).
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict("Resource already exists".to_string())
            }
            sqlx::Error::RowNotFound => ApiError::NotFound("Not found".to_string()),
            _ => ApiError::Upstream(err.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Upstream(inner) => {
                // Full detail stays server-side; clients get a generic message.
                tracing::error!(error = %inner, "Upstream failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
