// SPDX-License-Identifier: MIT

//! Wire types for the normalized profile contract.
//!
//! Field names mirror the upstream GraphQL schema (camelCase) so the proxy
//! response is a drop-in replacement for the raw `data` section.

use serde::{Deserialize, Deserializer, Serialize};

/// Normalized profile returned by `GET /api/user/{username}`.
///
/// `user_contest_ranking` is null for users without contest history; the
/// upstream resolver for it fails independently and is coalesced here rather
/// than failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub matched_user: MatchedUser,
    #[serde(default)]
    pub recent_submission_list: Vec<RecentSubmission>,
    #[serde(default)]
    pub user_contest_ranking: Option<ContestRanking>,
}

/// The primary user-profile field. Its presence governs user existence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    pub submit_stats: SubmitStats,
    pub profile: PublicProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    pub ac_submission_num: Vec<SubmissionCount>,
}

/// One accepted-submission aggregate: difficulty is one of
/// `All`, `Easy`, `Medium`, `Hard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionCount {
    pub difficulty: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub ranking: Option<u64>,
}

/// One entry of the 20 most recent submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub title: String,
    pub title_slug: String,
    /// Epoch seconds. Upstream serializes this as a string.
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub status_display: String,
    pub lang: String,
}

/// Contest participation, best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    pub attended_contests_count: u32,
    pub global_ranking: Option<u64>,
}

/// Upstream is inconsistent about whether `timestamp` is a JSON string or a
/// number; accept both.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Int(i64),
        Str(String),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(n) => Ok(n),
        StringOrInt::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
