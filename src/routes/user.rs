// SPDX-License-Identifier: MIT

//! Proxy endpoint: normalized LeetCode profiles.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Freshness hint for downstream HTTP caches. The proxy itself never caches.
const CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=30";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user", get(get_user_by_query))
        .route("/api/user/{username}", get(get_user))
}

#[derive(Deserialize)]
struct UserQuery {
    username: Option<String>,
}

/// `GET /api/user/{username}`
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Response> {
    fetch_profile(&state, &username).await
}

/// `GET /api/user?username=` — query-parameter form of the same contract.
async fn get_user_by_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserQuery>,
) -> Result<Response> {
    fetch_profile(&state, params.username.as_deref().unwrap_or_default()).await
}

async fn fetch_profile(state: &AppState, username: &str) -> Result<Response> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }

    tracing::debug!(username, "Fetching profile from upstream");
    let profile = state.leetcode.fetch_profile(username).await?;

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(profile)).into_response())
}
