//! Per-user learning progress, upserted keyed by user + syllabus position.

use chrono::{DateTime, Utc};

/// Progress for one user at one syllabus position.
///
/// `chapter_id`/`topic_id` are optional: subject-level progress leaves both
/// unset, chapter-level sets only `chapter_id`.
#[derive(Debug, Clone)]
pub struct Progress {
    pub id: i64,
    pub user_id: String,
    pub subject_id: i64,
    pub chapter_id: Option<i64>,
    pub topic_id: Option<i64>,
    pub percent: i32,
    pub last_accessed: DateTime<Utc>,
}

/// Upsert input. Concurrent upserts for the same key are resolved by the
/// store's atomic insert-or-update; the last write wins without duplicates.
#[derive(Debug, Clone)]
pub struct NewProgress {
    pub user_id: String,
    pub subject_id: i64,
    pub chapter_id: Option<i64>,
    pub topic_id: Option<i64>,
    pub percent: i32,
}
