// SPDX-License-Identifier: MIT

//! Persisted watch-list of tracked usernames.
//!
//! The only durable state in the system: an ordered JSON array of username
//! strings in a single file. Identity is case-insensitive, the stored casing
//! is whatever the user originally entered. No stats are ever persisted.

use crate::error::AppError;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Watch-list backed by a JSON file.
#[derive(Clone)]
pub struct WatchlistStore {
    path: PathBuf,
    entries: Arc<RwLock<Vec<String>>>,
}

impl WatchlistStore {
    /// Load the watch-list from `path`; a missing file means an empty list.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Corrupt watch-list file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(AppError::Internal(anyhow::Error::new(e).context(format!(
                    "Failed to read watch-list file {}",
                    path.display()
                ))))
            }
        };

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Ordered usernames, original casing.
    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }

    /// Case-insensitive membership test.
    pub async fn contains(&self, username: &str) -> bool {
        self.entries
            .read()
            .await
            .iter()
            .any(|u| u.eq_ignore_ascii_case(username))
    }

    /// Append a username and persist. Rejects case-insensitive duplicates.
    pub async fn add(&self, username: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|u| u.eq_ignore_ascii_case(username)) {
            return Err(AppError::BadRequest(format!(
                "User \"{}\" is already in the watch-list",
                username
            )));
        }
        entries.push(username.to_string());
        self.persist(&entries).await
    }

    /// Remove a username (case-insensitive) and persist.
    pub async fn remove(&self, username: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|u| !u.eq_ignore_ascii_case(username));
        if entries.len() == before {
            return Err(AppError::UserNotFound(username.to_string()));
        }
        self.persist(&entries).await
    }

    async fn persist(&self, entries: &[String]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let json = serde_json::to_vec_pretty(entries).context("Failed to encode watch-list")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write watch-list file {}", self.path.display()))?;
        Ok(())
    }
}
