// SPDX-License-Identifier: MIT

//! LeetCode Leaderboard backend
//!
//! This crate provides the proxy that normalizes LeetCode's unofficial
//! GraphQL API, plus the leaderboard service that tracks a watch-list of
//! usernames and derives their solve stats.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{LeaderboardService, LeetCodeClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub leetcode: LeetCodeClient,
    pub leaderboard: LeaderboardService,
}
