//! Integration tests for routing and input validation.
//!
//! Malformed identifiers and bodies must be rejected with JSON 400s before
//! any query runs, and unknown routes must answer with a uniform JSON 404.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, json_request, request_with_cookie, test_app};
use tower::ServiceExt;

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (app, _) = test_app();

    let response = app.oneshot(get("/api/does-not-exist")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_unknown_method_on_known_path_is_404() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request("DELETE", "/api/login", ""))
        .await
        .unwrap();

    // Method mismatches answer 405 from the router; both carry no state.
    assert!(
        response.status() == StatusCode::NOT_FOUND
            || response.status() == StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_non_numeric_roster_id_is_rejected() {
    let (app, sessions) = test_app();
    let token = sessions.create(1).await;

    let response = app
        .oneshot(request_with_cookie(
            "PUT",
            "/api/rosters/abc",
            &token,
            r#"{"mem_status":"active"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "roster id must be numeric");
}

#[tokio::test]
async fn test_non_numeric_event_id_is_rejected() {
    let (app, _) = test_app();

    let response = app.oneshot(get("/api/rsvps/chess-night")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "event id must be numeric");
}

#[tokio::test]
async fn test_rsvp_without_event_id_is_rejected() {
    let (app, sessions) = test_app();
    let token = sessions.create(1).await;

    let response = app
        .oneshot(request_with_cookie("POST", "/api/rsvps", &token, "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "event_id is required");
}

#[tokio::test]
async fn test_join_without_club_id_is_rejected() {
    let (app, sessions) = test_app();
    let token = sessions.create(1).await;

    let response = app
        .oneshot(request_with_cookie("POST", "/api/rosters", &token, "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "club_id is required");
}

#[tokio::test]
async fn test_malformed_json_body_degrades_to_400() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request("POST", "/api/login", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_with_missing_fields_is_rejected() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"a@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_pending_mem_status_is_rejected_with_decide_rule() {
    let (app, sessions) = test_app();
    let token = sessions.create(1).await;

    // 'pending' parses as a status but is not a decision; the route and the
    // state machine agree on the message.
    let response = app
        .oneshot(request_with_cookie(
            "PUT",
            "/api/rosters/5",
            &token,
            r#"{"mem_status":"pending"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "mem_status must be 'active'; reject by deleting the roster entry"
    );
}

#[tokio::test]
async fn test_invalid_mem_status_is_rejected() {
    let (app, sessions) = test_app();
    let token = sessions.create(1).await;

    let response = app
        .oneshot(request_with_cookie(
            "PUT",
            "/api/rosters/5",
            &token,
            r#"{"mem_status":"banned"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
