// SPDX-License-Identifier: MIT

//! Watch-list and leaderboard endpoints.

use crate::error::Result;
use crate::models::ProfileSnapshot;
use crate::services::leaderboard::RefreshFailure;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/watchlist", get(list_watchlist).post(add_user))
        .route("/api/watchlist/{username}", delete(remove_user))
        .route("/api/leaderboard", get(get_leaderboard))
}

// ─── Watch-list ──────────────────────────────────────────────

#[derive(Serialize)]
struct WatchlistResponse {
    usernames: Vec<String>,
}

/// Watched usernames in insertion order, original casing.
async fn list_watchlist(State(state): State<Arc<AppState>>) -> Json<WatchlistResponse> {
    Json(WatchlistResponse {
        usernames: state.leaderboard.watched().await,
    })
}

#[derive(Deserialize)]
struct AddUserRequest {
    /// Bare handle or profile URL; the server extracts the username.
    input: String,
}

/// Add a user to the watch-list.
///
/// Validates against the upstream before adding; on any fetch error the list
/// is left unchanged and the error surfaces to the caller. Returns the
/// freshly derived snapshot so the UI can render the row immediately.
async fn add_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddUserRequest>,
) -> Result<Json<ProfileSnapshot>> {
    let snapshot = state.leaderboard.add(&req.input).await?;
    Ok(Json(snapshot))
}

/// Remove a user from the watch-list. The client asks for confirmation
/// before calling this.
async fn remove_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<WatchlistResponse>> {
    state.leaderboard.remove(&username).await?;
    Ok(Json(WatchlistResponse {
        usernames: state.leaderboard.watched().await,
    }))
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    /// Sorted render set: descending total solved, insertion order on ties.
    pub entries: Vec<ProfileSnapshot>,
    /// Users dropped from this refresh, for optional surfacing.
    pub failures: Vec<RefreshFailure>,
    pub generated_at: String,
}

/// Refresh every watched user and return the derived leaderboard.
///
/// Always 200: per-user failures are reported in the body, never as a batch
/// failure.
async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    let outcome = state.leaderboard.refresh_all().await;

    tracing::debug!(
        entries = outcome.entries.len(),
        failures = outcome.failures.len(),
        "Leaderboard refreshed"
    );

    Json(LeaderboardResponse {
        entries: outcome.entries,
        failures: outcome.failures,
        generated_at: format_utc_rfc3339(chrono::Utc::now()),
    })
}
