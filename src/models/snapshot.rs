// SPDX-License-Identifier: MIT

//! Derived per-user leaderboard view.
//!
//! A snapshot is rebuilt wholesale from a fresh proxy response on every
//! refresh and never mutated in place.

use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;

use crate::models::profile::{ProfileResponse, RecentSubmission};
use crate::time_utils::time_ago;

/// Normalized, derived view of one user's stats at a point in time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    /// As originally entered by the user (identity is case-insensitive,
    /// display keeps this casing).
    pub username: String,
    pub total_solved: u32,
    pub easy_count: u32,
    pub medium_count: u32,
    pub hard_count: u32,
    pub global_rank: Option<u64>,
    pub attended_contests: u32,
    pub solved_today_count: u32,
    /// Epoch seconds of the most recent submission, if any.
    pub last_submission_at: Option<i64>,
    /// Coarse recency label ("3d ago"), if any submission exists.
    pub last_active: Option<String>,
    pub recent_submissions: Vec<RecentSubmission>,
}

impl ProfileSnapshot {
    /// Flatten a proxy response into display metrics.
    ///
    /// `today` and `now_epoch` are passed in so the whole batch of a refresh
    /// is derived against one consistent clock reading.
    pub fn derive(
        username: &str,
        response: ProfileResponse,
        today: NaiveDate,
        now_epoch: i64,
    ) -> Self {
        let counts = &response.matched_user.submit_stats.ac_submission_num;
        let count_for = |difficulty: &str| {
            counts
                .iter()
                .find(|c| c.difficulty == difficulty)
                .map(|c| c.count)
                .unwrap_or(0)
        };

        let submissions = response.recent_submission_list;
        let last_submission_at = submissions.first().map(|s| s.timestamp);

        Self {
            username: username.to_string(),
            total_solved: count_for("All"),
            easy_count: count_for("Easy"),
            medium_count: count_for("Medium"),
            hard_count: count_for("Hard"),
            global_rank: response.matched_user.profile.ranking,
            attended_contests: response
                .user_contest_ranking
                .map(|c| c.attended_contests_count)
                .unwrap_or(0),
            solved_today_count: solved_today(&submissions, today),
            last_submission_at,
            last_active: last_submission_at
                .map(|ts| time_ago(now_epoch.saturating_sub(ts).max(0))),
            recent_submissions: submissions,
        }
    }

    /// Width fractions (easy, medium, hard) for the difficulty breakdown bar.
    ///
    /// A user with zero solves gets an empty bar, not NaN.
    pub fn difficulty_fractions(&self) -> (f64, f64, f64) {
        if self.total_solved == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = f64::from(self.total_solved);
        (
            f64::from(self.easy_count) / total,
            f64::from(self.medium_count) / total,
            f64::from(self.hard_count) / total,
        )
    }
}

/// Count submissions whose local calendar day equals `today`.
pub fn solved_today(submissions: &[RecentSubmission], today: NaiveDate) -> u32 {
    submissions
        .iter()
        .filter(|s| {
            Local
                .timestamp_opt(s.timestamp, 0)
                .single()
                .map(|dt| dt.date_naive() == today)
                .unwrap_or(false)
        })
        .count() as u32
}

/// Sort for display: descending by total solved, insertion order on ties.
///
/// `sort_by` is stable, which is what keeps equal totals in the order the
/// users were added.
pub fn sort_for_display(snapshots: &mut [ProfileSnapshot]) {
    snapshots.sort_by(|a, b| b.total_solved.cmp(&a.total_solved));
}
