// SPDX-License-Identifier: MIT

//! LeetCode GraphQL client.
//!
//! LeetCode has no official API; the GraphQL endpoint its own frontend uses
//! rejects requests that don't look like they came from a browser, so the
//! outbound request carries a full set of browser-emulation headers. The
//! endpoint also fails per-resolver: a response can carry valid `data`
//! alongside an `errors` array (contest ranking errors for users with no
//! contest history), so classification inspects the data section first and
//! only treats error-only responses as failures.

use crate::error::AppError;
use crate::models::profile::{ContestRanking, MatchedUser, ProfileResponse, RecentSubmission};
use reqwest::header;
use serde::Deserialize;

/// Fixed query: difficulty-bucketed AC counts, global ranking, the 20 most
/// recent submissions, and best-effort contest participation in one round
/// trip.
const USER_PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
    matchedUser(username: $username) {
        username
        submitStats: submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
            }
        }
        profile {
            ranking
        }
    }
    recentSubmissionList(username: $username, limit: 20) {
        title
        titleSlug
        timestamp
        statusDisplay
        lang
    }
    userContestRanking(username: $username) {
        attendedContestsCount
        globalRanking
    }
}
"#;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// How much of a non-JSON upstream body to keep for diagnostics.
const BODY_EXCERPT_LEN: usize = 200;

/// LeetCode GraphQL API client.
#[derive(Clone)]
pub struct LeetCodeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LeetCodeClient {
    /// Create a client for the given GraphQL endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch and normalize one user's profile.
    ///
    /// The username must be non-empty after trimming; callers are expected to
    /// have already extracted a bare handle from any profile URL.
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileResponse, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username is required".to_string()));
        }

        let payload = serde_json::json!({
            "query": USER_PROFILE_QUERY,
            "variables": { "username": username },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header(header::REFERER, format!("https://leetcode.com/{}/", username))
            .header(header::ORIGIN, "https://leetcode.com")
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::ACCEPT, "application/json, text/javascript, */*; q=0.01")
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Sec-Fetch-Dest", "empty")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Site", "same-origin")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::UpstreamTransport(e.to_string()))?;

        // Read the body as text even on non-2xx: LeetCode serves challenge
        // pages and partial GraphQL responses under various status codes.
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamTransport(e.to_string()))?;

        classify_response(status, &body, username)
    }
}

/// Fields of the `data` section, each nullable independently.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfileData {
    matched_user: MatchedUser,
    #[serde(default)]
    recent_submission_list: Option<Vec<RecentSubmission>>,
    #[serde(default)]
    user_contest_ranking: Option<ContestRanking>,
}

/// Classify an upstream response body into the normalized contract.
///
/// Order matters and mirrors the known upstream failure modes:
/// 1. non-JSON body (HTML challenge page) -> `UpstreamMalformed`
/// 2. populated `data` with null `matchedUser` -> `UserNotFound`, no matter
///    what the HTTP status was or what the `errors` array says
/// 3. populated `data` with a user -> success; errors on secondary fields
///    are swallowed and those fields coalesce to null/empty
/// 4. no `data`, only `errors` -> `UpstreamGraphQl`
/// 5. anything else -> `UpstreamUnexpectedShape`
fn classify_response(
    status: u16,
    body: &str,
    username: &str,
) -> Result<ProfileResponse, AppError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| {
        tracing::warn!(status, "Upstream returned a non-JSON body");
        AppError::UpstreamMalformed {
            status,
            excerpt: body.chars().take(BODY_EXCERPT_LEN).collect(),
        }
    })?;

    if let Some(data) = value.get("data").filter(|d| !d.is_null()) {
        if data.get("matchedUser").is_none_or(|m| m.is_null()) {
            return Err(AppError::UserNotFound(username.to_string()));
        }

        let raw: RawProfileData = serde_json::from_value(data.clone())
            .map_err(|_| AppError::UpstreamUnexpectedShape)?;

        return Ok(ProfileResponse {
            matched_user: raw.matched_user,
            recent_submission_list: raw.recent_submission_list.unwrap_or_default(),
            user_contest_ranking: raw.user_contest_ranking,
        });
    }

    if let Some(errors) = value.get("errors").and_then(|e| e.as_array()) {
        let message = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AppError::UpstreamGraphQl(message));
    }

    Err(AppError::UpstreamUnexpectedShape)
}
