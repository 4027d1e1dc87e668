// SPDX-License-Identifier: MIT

use axum::{extract::Json as ExtractJson, http::StatusCode, response::IntoResponse, routing::post, Router};
use leetcode_leaderboard::config::Config;
use leetcode_leaderboard::routes::create_router;
use leetcode_leaderboard::services::{LeaderboardService, LeetCodeClient, WatchlistStore};
use leetcode_leaderboard::AppState;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static WATCHLIST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A watch-list file path unique to this test invocation.
#[allow(dead_code)]
pub fn unique_watchlist_path() -> String {
    std::env::temp_dir()
        .join(format!(
            "leetboard-it-{}-{}.json",
            std::process::id(),
            WATCHLIST_COUNTER.fetch_add(1, Ordering::Relaxed)
        ))
        .to_string_lossy()
        .into_owned()
}

/// Create a test app pointed at the given upstream GraphQL endpoint.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app(upstream_url: &str) -> (axum::Router, Arc<AppState>) {
    create_test_app_at(upstream_url, &unique_watchlist_path()).await
}

/// Like [`create_test_app`] but with an explicit watch-list file, for tests
/// that pre-seed the persisted list.
#[allow(dead_code)]
pub async fn create_test_app_at(
    upstream_url: &str,
    watchlist_path: &str,
) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        upstream_url: upstream_url.to_string(),
        watchlist_path: watchlist_path.to_string(),
        ..Config::test_default()
    };

    let watchlist = WatchlistStore::load(&config.watchlist_path)
        .await
        .expect("watch-list should load");
    let leetcode = LeetCodeClient::new(&config.upstream_url);
    let leaderboard = LeaderboardService::new(leetcode.clone(), watchlist);

    let state = Arc::new(AppState {
        config,
        leetcode,
        leaderboard,
    });

    (create_router(state.clone()), state)
}

/// Spawn a stub LeetCode GraphQL server on a random local port.
///
/// Behavior by requested username:
/// - `ghost` — null `matchedUser` (user does not exist)
/// - `flaky` — HTML challenge page with a 403
/// - `alice` — 42 solves, contest resolver errored alongside valid data
/// - anything else — 100 solves, contest data present
#[allow(dead_code)]
pub async fn spawn_stub_upstream() -> String {
    let app = Router::new().route("/graphql", post(stub_graphql));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream");
    });
    format!("http://{}/graphql", addr)
}

fn matched_user(username: &str, easy: u64, medium: u64, hard: u64) -> Value {
    json!({
        "username": username,
        "submitStats": {
            "acSubmissionNum": [
                { "difficulty": "All", "count": easy + medium + hard },
                { "difficulty": "Easy", "count": easy },
                { "difficulty": "Medium", "count": medium },
                { "difficulty": "Hard", "count": hard },
            ]
        },
        "profile": { "ranking": 123456 }
    })
}

async fn stub_graphql(ExtractJson(body): ExtractJson<Value>) -> axum::response::Response {
    let username = body["variables"]["username"].as_str().unwrap_or_default();

    match username {
        "ghost" => axum::Json(json!({
            "data": {
                "matchedUser": null,
                "recentSubmissionList": [],
                "userContestRanking": null,
            }
        }))
        .into_response(),
        "flaky" => (
            StatusCode::FORBIDDEN,
            "<html><head><title>Just a moment...</title></head></html>",
        )
            .into_response(),
        "alice" => axum::Json(json!({
            "errors": [ { "message": "contest ranking unavailable" } ],
            "data": {
                "matchedUser": matched_user("alice", 30, 10, 2),
                "recentSubmissionList": [
                    {
                        "title": "Two Sum",
                        "titleSlug": "two-sum",
                        "timestamp": "1700000000",
                        "statusDisplay": "Accepted",
                        "lang": "rust",
                    }
                ],
                "userContestRanking": null,
            }
        }))
        .into_response(),
        other => axum::Json(json!({
            "data": {
                "matchedUser": matched_user(other, 60, 30, 10),
                "recentSubmissionList": [],
                "userContestRanking": {
                    "attendedContestsCount": 5,
                    "globalRanking": 777,
                },
            }
        }))
        .into_response(),
    }
}
