//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::common::auth::SessionStore;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    create_club_handler, create_roster, decide_roster, health_handler, list_attendees,
    list_clubs, list_events, list_roster, login, logout, me, not_found_handler, register,
    remove_roster, toggle_rsvp, update_me,
};

/// Shared application state
///
/// The session store lives here and nowhere else; handlers and middleware
/// receive it through this state, never through a global.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub sessions: Arc<SessionStore>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    build_app_with_sessions(pool, Arc::new(SessionStore::new()))
}

/// Build the router with an externally owned session store.
///
/// Split out so tests can seed sessions before driving requests.
pub fn build_app_with_sessions(pool: PgPool, sessions: Arc<SessionStore>) -> Router {
    let app_state = AppState {
        db_pool: pool,
        sessions: sessions.clone(),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    // Clone session store for the middleware closure
    let sessions_for_middleware = sessions.clone();

    Router::new()
        // Account and session routes
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/logout", post(logout))
        .route("/api/me", get(me).put(update_me))
        // Clubs and events
        .route("/api/clubs", get(list_clubs).post(create_club_handler))
        .route("/api/events", get(list_events))
        // Rosters: POST joins, :id serves club roster (GET) and entry
        // decisions (PUT/DELETE)
        .route("/api/rosters", post(create_roster))
        .route(
            "/api/rosters/:id",
            get(list_roster).put(decide_roster).delete(remove_roster),
        )
        // RSVPs
        .route("/api/rsvps", post(toggle_rsvp))
        .route("/api/rsvps/:event_id", get(list_attendees))
        // Health check
        .route("/health", get(health_handler))
        // Uniform JSON 404 for unknown routes
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            session_auth_middleware(sessions_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
