// SPDX-License-Identifier: MIT

//! Leaderboard client: watch-list maintenance and batch refresh.
//!
//! Refreshes are best-effort by design: one unreachable profile must not
//! blank the whole board, so per-user failures are logged and kept in a
//! separate list while the successful snapshots are rendered.

use crate::error::AppError;
use crate::models::snapshot::{sort_for_display, ProfileSnapshot};
use crate::services::{LeetCodeClient, WatchlistStore};
use chrono::Local;
use futures_util::future::join_all;
use serde::Serialize;

/// Path segment LeetCode uses for profile URLs (`leetcode.com/u/{name}`).
const PROFILE_PATH_MARKER: &str = "u";

/// Watch-list plus derivation logic on top of the proxy.
#[derive(Clone)]
pub struct LeaderboardService {
    leetcode: LeetCodeClient,
    store: WatchlistStore,
}

/// One refresh pass over every watched user.
///
/// `entries` is the render set, already sorted; `failures` is kept for
/// surfacing/logging rather than discarded.
#[derive(Debug, Serialize)]
pub struct RefreshOutcome {
    pub entries: Vec<ProfileSnapshot>,
    pub failures: Vec<RefreshFailure>,
}

#[derive(Debug, Serialize)]
pub struct RefreshFailure {
    pub username: String,
    pub error: String,
}

impl LeaderboardService {
    pub fn new(leetcode: LeetCodeClient, store: WatchlistStore) -> Self {
        Self { leetcode, store }
    }

    /// Currently watched usernames, in insertion order.
    pub async fn watched(&self) -> Vec<String> {
        self.store.entries().await
    }

    /// Add a user from raw input (bare handle or profile URL).
    ///
    /// Duplicates are rejected before any network call; the profile is
    /// fetched once to validate the user exists, and the returned snapshot
    /// doubles as immediate display data.
    pub async fn add(&self, raw_input: &str) -> Result<ProfileSnapshot, AppError> {
        let username = extract_username(raw_input);
        if username.is_empty() {
            return Err(AppError::BadRequest("Username is required".to_string()));
        }
        if self.store.contains(&username).await {
            return Err(AppError::BadRequest(format!(
                "User \"{}\" is already in the watch-list",
                username
            )));
        }

        let response = self.leetcode.fetch_profile(&username).await?;

        let now = Local::now();
        let snapshot =
            ProfileSnapshot::derive(&username, response, now.date_naive(), now.timestamp());

        self.store.add(&username).await?;
        tracing::info!(username = %username, "User added to watch-list");
        Ok(snapshot)
    }

    /// Remove a user (case-insensitive). Confirmation happens client-side.
    pub async fn remove(&self, username: &str) -> Result<(), AppError> {
        self.store.remove(username).await?;
        tracing::info!(username = %username, "User removed from watch-list");
        Ok(())
    }

    /// Fetch every watched user concurrently and build a fresh, sorted
    /// render set.
    ///
    /// Calls are issued independently and awaited jointly; a failing call is
    /// logged and dropped from the render set without affecting the others.
    /// The returned set replaces the previous one wholesale, so callers never
    /// see a partially refreshed board.
    pub async fn refresh_all(&self) -> RefreshOutcome {
        let watched = self.store.entries().await;

        // One clock reading for the whole batch.
        let now = Local::now();
        let today = now.date_naive();
        let now_epoch = now.timestamp();

        let fetches = watched.iter().map(|username| {
            let client = self.leetcode.clone();
            async move { (username.clone(), client.fetch_profile(username).await) }
        });
        let results = join_all(fetches).await;

        let mut entries = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (username, result) in results {
            match result {
                Ok(response) => {
                    entries.push(ProfileSnapshot::derive(&username, response, today, now_epoch));
                }
                Err(e) => {
                    tracing::warn!(username = %username, error = %e, "Dropping user from refresh");
                    failures.push(RefreshFailure {
                        username,
                        error: e.to_string(),
                    });
                }
            }
        }

        sort_for_display(&mut entries);
        RefreshOutcome { entries, failures }
    }
}

/// Extract a bare username from a raw handle or a profile URL.
///
/// Accepts `alice`, `leetcode.com/alice`, `https://leetcode.com/u/alice/`
/// and the like: strip the scheme and domain, split the path on `/`, skip
/// the `u` profile marker if present, take the next segment.
pub fn extract_username(raw: &str) -> String {
    let mut input = raw.trim();

    if !input.contains('/') {
        return input.to_string();
    }

    if let Some((_, rest)) = input.split_once("://") {
        input = rest;
    }

    let segments: Vec<&str> = input.split('/').filter(|s| !s.is_empty()).collect();
    // A leading segment with a dot is the host, not part of the path.
    let path = match segments.first() {
        Some(first) if first.contains('.') => &segments[1..],
        _ => &segments[..],
    };

    match path {
        [marker, name, ..] if *marker == PROFILE_PATH_MARKER => (*name).to_string(),
        [name, ..] => (*name).to_string(),
        [] => String::new(),
    }
}
