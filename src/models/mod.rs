// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod profile;
pub mod snapshot;

pub use profile::{ContestRanking, MatchedUser, ProfileResponse, RecentSubmission};
pub use snapshot::ProfileSnapshot;
