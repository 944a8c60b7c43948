//! Thread API integration tests
//!
//! Thread creation behind the auth middleware, listing, and tree retrieval.

#![cfg(feature = "ssr")]

mod common;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{assert_error, TestApp, TEST_PASSWORD, TEST_SECRET};
use number_talk::backend::auth::{create_token, Claims};

#[tokio::test]
async fn test_create_thread() {
    let app = TestApp::new().await;
    let token = app.signed_up("alice").await;

    let response = app.create_thread(&token, json!({ "value": 10 })).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["value"].as_f64(), Some(10.0));
    assert_eq!(body["author"]["username"], "alice");
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_thread_accepts_fractions_and_negatives() {
    let app = TestApp::new().await;
    let token = app.signed_up("alice").await;

    let body: Value = app.create_thread(&token, json!({ "value": -2.5 })).await.json();
    assert_eq!(body["value"].as_f64(), Some(-2.5));
}

#[tokio::test]
async fn test_create_thread_value_must_be_number() {
    let app = TestApp::new().await;
    let token = app.signed_up("alice").await;

    for body in [json!({ "value": "10" }), json!({ "value": null }), json!({})] {
        let response = app.create_thread(&token, body).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "value must be a number");
    }
    assert!(app.threads().await.is_empty());
}

#[tokio::test]
async fn test_create_thread_without_header() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/threads").json(&json!({ "value": 1 })).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Unauthorized");
    assert!(app.threads().await.is_empty());
}

#[tokio::test]
async fn test_create_thread_with_wrong_scheme() {
    let app = TestApp::new().await;
    let token = app.signed_up("alice").await;

    let response = app
        .server
        .post("/api/threads")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&format!("Token {}", token)).unwrap())
        .json(&json!({ "value": 1 }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Unauthorized");
    assert!(app.threads().await.is_empty());
}

#[tokio::test]
async fn test_create_thread_with_garbage_token() {
    let app = TestApp::new().await;

    let response = app.create_thread("garbage", json!({ "value": 1 })).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
    assert!(app.threads().await.is_empty());
}

#[tokio::test]
async fn test_create_thread_with_expired_token() {
    let app = TestApp::new().await;
    let registered: Value = app.register("alice", TEST_PASSWORD).await.json();

    let now = chrono::Utc::now().timestamp() as u64;
    let claims = Claims {
        sub: registered["id"].as_str().unwrap().to_string(),
        iat: now - 3 * 86_400,
        exp: now - 2 * 86_400,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.create_thread(&token, json!({ "value": 1 })).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
    assert!(app.threads().await.is_empty());
}

#[tokio::test]
async fn test_create_thread_for_unknown_user() {
    let app = TestApp::new().await;
    let token = create_token(Uuid::new_v4(), &app.state.auth).unwrap();

    let response = app.create_thread(&token, json!({ "value": 1 })).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
    assert!(app.threads().await.is_empty());
}

#[tokio::test]
async fn test_list_threads_newest_first() {
    let app = TestApp::new().await;
    let alice = app.signed_up("alice").await;
    let bob = app.signed_up("bob").await;

    let first = app.thread_id(&alice, 1.0).await;
    let second = app.thread_id(&bob, 2.0).await;
    let third = app.thread_id(&alice, 3.0).await;

    let threads = app.threads().await;
    let ids: Vec<&str> = threads.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec![third.as_str(), second.as_str(), first.as_str()]);

    assert_eq!(threads[1]["author"]["username"], "bob");
    assert_eq!(threads[0]["author"]["username"], "alice");
}

#[tokio::test]
async fn test_list_threads_is_public() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/threads").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_tree_of_new_thread() {
    let app = TestApp::new().await;
    let token = app.signed_up("alice").await;
    let thread_id = app.thread_id(&token, 42.0).await;

    let response = app.tree(&thread_id).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["thread"]["id"], thread_id.as_str());
    assert_eq!(body["thread"]["value"].as_f64(), Some(42.0));
    assert_eq!(body["thread"]["author"]["username"], "alice");
    assert_eq!(body["operations"], json!([]));
}

#[tokio::test]
async fn test_tree_unknown_thread() {
    let app = TestApp::new().await;

    let response = app.tree(&Uuid::new_v4().to_string()).await;
    assert_error(&response, StatusCode::NOT_FOUND, "Thread not found");
}

#[tokio::test]
async fn test_tree_malformed_id() {
    let app = TestApp::new().await;

    let response = app.tree("not-a-uuid").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Thread not found");
}
