// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// LeetCode GraphQL endpoint (overridable for tests)
    pub upstream_url: String,
    /// Path of the persisted watch-list file
    pub watchlist_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            upstream_url: env::var("UPSTREAM_GRAPHQL_URL")
                .unwrap_or_else(|_| "https://leetcode.com/graphql".to_string()),
            watchlist_path: env::var("WATCHLIST_PATH")
                .unwrap_or_else(|_| "data/watchlist.json".to_string()),
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            upstream_url: "http://127.0.0.1:9/graphql".to_string(),
            watchlist_path: std::env::temp_dir()
                .join("leetboard-test-watchlist.json")
                .to_string_lossy()
                .into_owned(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
