// SPDX-License-Identifier: MIT

//! LeetCode Leaderboard API Server
//!
//! Proxies LeetCode's unofficial GraphQL API into a stable JSON contract and
//! serves the watch-list-driven leaderboard on top of it.

use leetcode_leaderboard::{
    config::Config,
    services::{LeaderboardService, LeetCodeClient, WatchlistStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting LeetCode Leaderboard API");

    // Load the persisted watch-list
    let watchlist = WatchlistStore::load(&config.watchlist_path)
        .await
        .expect("Failed to load watch-list");
    let watched = watchlist.entries().await.len();
    tracing::info!(path = %config.watchlist_path, watched, "Watch-list loaded");

    // Upstream proxy client
    let leetcode = LeetCodeClient::new(&config.upstream_url);

    // Leaderboard service on top of the proxy
    let leaderboard = LeaderboardService::new(leetcode.clone(), watchlist);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        leetcode,
        leaderboard,
    });

    // Build router
    let app = leetcode_leaderboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("leetcode_leaderboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
