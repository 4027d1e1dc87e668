// SPDX-License-Identifier: MIT

//! Business logic services.

pub mod leaderboard;
pub mod leetcode;
pub mod watchlist;

pub use leaderboard::{LeaderboardService, RefreshOutcome};
pub use leetcode::LeetCodeClient;
pub use watchlist::WatchlistStore;
