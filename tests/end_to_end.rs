//! End-to-end API flow
//!
//! Register, log in, start a thread, reply to it, read the tree back.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::TestApp;

#[tokio::test]
async fn test_full_flow() {
    let app = TestApp::new().await;

    let response = app.register("testuser", "secret123").await;
    response.assert_status(StatusCode::CREATED);
    let user: Value = response.json();

    let response = app.login("testuser", "secret123").await;
    response.assert_status_ok();
    let login: Value = response.json();
    let token = login["token"].as_str().unwrap().to_string();
    assert_eq!(login["user"]["id"], user["id"]);

    let response = app.create_thread(&token, json!({ "value": 10 })).await;
    response.assert_status(StatusCode::CREATED);
    let thread: Value = response.json();
    assert_eq!(thread["value"].as_f64(), Some(10.0));
    let thread_id = thread["id"].as_str().unwrap().to_string();

    let response = app
        .create_operation(
            &token,
            json!({
                "threadId": thread_id,
                "parentId": null,
                "operation": "ADD",
                "rightOperand": 5,
            }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);
    let node: Value = response.json();
    assert_eq!(node["result"].as_f64(), Some(15.0));

    let response = app.tree(&thread_id).await;
    response.assert_status_ok();
    let tree: Value = response.json();

    assert_eq!(tree["thread"]["id"], thread_id.as_str());
    let operations = tree["operations"].as_array().unwrap();
    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0]["operation"], "ADD");
    assert_eq!(operations[0]["rightOperand"].as_f64(), Some(5.0));
    assert_eq!(operations[0]["result"].as_f64(), Some(15.0));
    assert_eq!(operations[0]["author"]["username"], "testuser");

    let threads = app.threads().await;
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0]["id"], thread_id.as_str());
}
