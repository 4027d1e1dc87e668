// SPDX-License-Identifier: MIT

//! Watch-list and batch-refresh behavior through the HTTP surface.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn add_request(input: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/watchlist")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "input": input }).to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_add_extracts_username_from_profile_url() {
    let upstream = common::spawn_stub_upstream().await;
    let (app, state) = common::create_test_app(&upstream).await;

    let response = app
        .clone()
        .oneshot(add_request("https://leetcode.com/u/alice/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["totalSolved"], 42);
    assert_eq!(body["easyCount"], 30);
    // Contest resolver errored upstream; count defaults to zero.
    assert_eq!(body["attendedContests"], 0);

    assert_eq!(state.leaderboard.watched().await, vec!["alice"]);
}

#[tokio::test]
async fn test_add_unknown_user_leaves_list_unchanged() {
    let upstream = common::spawn_stub_upstream().await;
    let (app, state) = common::create_test_app(&upstream).await;

    let response = app.oneshot(add_request("ghost")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(state.leaderboard.watched().await.is_empty());
}

#[tokio::test]
async fn test_duplicate_add_rejected_before_any_network_call() {
    // Unreachable upstream: if the duplicate check didn't fire first, the
    // add would surface as a 500 transport error instead of a 400.
    let path = common::unique_watchlist_path();
    tokio::fs::write(&path, r#"["Alice"]"#).await.unwrap();
    let (app, state) = common::create_test_app_at("http://127.0.0.1:9/graphql", &path).await;

    let response = app.oneshot(add_request("alice")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.leaderboard.watched().await, vec!["Alice"]);
}

#[tokio::test]
async fn test_duplicate_add_is_case_insensitive() {
    let upstream = common::spawn_stub_upstream().await;
    let (app, state) = common::create_test_app(&upstream).await;

    let first = app.clone().oneshot(add_request("Alice")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(add_request("alice")).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = body_json(second).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("already in the watch-list"));

    // Exactly one entry, original casing preserved.
    assert_eq!(state.leaderboard.watched().await, vec!["Alice"]);
}

#[tokio::test]
async fn test_empty_input_is_bad_request() {
    let upstream = common::spawn_stub_upstream().await;
    let (app, _state) = common::create_test_app(&upstream).await;

    let response = app.oneshot(add_request("   ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Username is required");
}

#[tokio::test]
async fn test_remove_is_case_insensitive() {
    let upstream = common::spawn_stub_upstream().await;
    let (app, state) = common::create_test_app(&upstream).await;

    state.leaderboard.add("Alice").await.unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/watchlist/ALICE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.leaderboard.watched().await.is_empty());

    // Removing again is a 404.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/watchlist/alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_refresh_drops_failing_users_without_failing_the_batch() {
    // "flaky" was valid when added but fails upstream now; pre-seed the
    // persisted list the way a restart would find it.
    let upstream = common::spawn_stub_upstream().await;
    let path = common::unique_watchlist_path();
    tokio::fs::write(&path, r#"["alice","bob","flaky"]"#)
        .await
        .unwrap();
    let (app, _state) = common::create_test_app_at(&upstream, &path).await;

    let response = app.oneshot(get_request("/api/leaderboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    let failures = body["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["username"], "flaky");
}

#[tokio::test]
async fn test_leaderboard_sorted_descending_by_total() {
    let upstream = common::spawn_stub_upstream().await;
    let (app, state) = common::create_test_app(&upstream).await;

    // alice: 42 solves; bob: 100 solves (stub default).
    state.leaderboard.add("alice").await.unwrap();
    state.leaderboard.add("bob").await.unwrap();

    let response = app.oneshot(get_request("/api/leaderboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["username"], "bob");
    assert_eq!(entries[0]["totalSolved"], 100);
    assert_eq!(entries[0]["attendedContests"], 5);
    assert_eq!(entries[1]["username"], "alice");
    assert!(body["failures"].as_array().unwrap().is_empty());
    assert!(body["generatedAt"].is_string());
}

#[tokio::test]
async fn test_watchlist_round_trip_through_restart() {
    let upstream = common::spawn_stub_upstream().await;
    let (_app, state) = common::create_test_app(&upstream).await;

    state.leaderboard.add("Alice").await.unwrap();
    state.leaderboard.add("bob").await.unwrap();

    // Same file, fresh store: simulates a server restart.
    let reloaded =
        leetcode_leaderboard::services::WatchlistStore::load(&state.config.watchlist_path)
            .await
            .unwrap();
    assert_eq!(reloaded.entries().await, vec!["Alice", "bob"]);
}
