// HTTP routes
pub mod auth;
pub mod clubs;
pub mod events;
pub mod health;
pub mod rosters;
pub mod rsvps;

pub use auth::*;
pub use clubs::*;
pub use events::*;
pub use health::*;
pub use rosters::*;
pub use rsvps::*;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Fallback for unknown method/path combinations.
///
/// Always a machine-readable JSON error, never a bare text body, so API
/// clients see one error shape everywhere.
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found" })),
    )
}
