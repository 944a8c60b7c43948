//! Authentication API integration tests
//!
//! Registration, login, and the probes that do not need a token.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{assert_error, TestApp, TEST_PASSWORD, TEST_SECRET};
use number_talk::backend::auth::verify_token;
use number_talk::backend::server::AuthConfig;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app.register("testuser", TEST_PASSWORD).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["username"], "testuser");
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;

    app.register("testuser", TEST_PASSWORD).await.assert_status(StatusCode::CREATED);
    let response = app.register("testuser", "another-password").await;

    assert_error(&response, StatusCode::CONFLICT, "Username already taken");
}

#[tokio::test]
async fn test_register_requires_both_fields() {
    let app = TestApp::new().await;

    let missing_password = app
        .server
        .post("/api/auth/register")
        .json(&json!({ "username": "testuser" }))
        .await;
    assert_error(&missing_password, StatusCode::BAD_REQUEST, "Username and password are required");

    let empty_username = app.register("", TEST_PASSWORD).await;
    assert_error(&empty_username, StatusCode::BAD_REQUEST, "Username and password are required");
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/register")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let registered: Value = app.register("testuser", TEST_PASSWORD).await.json();

    let response = app.login("testuser", TEST_PASSWORD).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["user"]["username"], "testuser");
    assert_eq!(body["user"]["id"], registered["id"]);

    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &AuthConfig::new(TEST_SECRET)).unwrap();
    assert_eq!(claims.sub, registered["id"].as_str().unwrap());
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register("testuser", TEST_PASSWORD).await;

    let response = app.login("testuser", "wrong-password").await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;

    let response = app.login("nobody", TEST_PASSWORD).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "password": TEST_PASSWORD }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Username and password are required");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_db_check_counts_users() {
    let app = TestApp::new().await;

    let before: Value = app.server.get("/api/db-check").await.json();
    assert_eq!(before, json!({ "usersCount": 0 }));

    app.register("alice", TEST_PASSWORD).await;
    app.register("bob", TEST_PASSWORD).await;

    let after: Value = app.server.get("/api/db-check").await.json();
    assert_eq!(after, json!({ "usersCount": 2 }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/nope").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Not found");
}
