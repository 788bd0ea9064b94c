//! Repository trait for learning-progress upserts.

use async_trait::async_trait;

use crate::domain::entities::{NewProgress, Progress};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Inserts or updates progress for the user + syllabus-position key.
    ///
    /// Must be atomic at the store level: concurrent upserts for the same key
    /// resolve last-write-wins without creating duplicate rows.
    async fn upsert(&self, new_progress: NewProgress) -> Result<Progress, AppError>;

    /// Progress rows for a user, optionally scoped to a subject.
    async fn list_for_user(
        &self,
        user_id: &str,
        subject_id: Option<i64>,
    ) -> Result<Vec<Progress>, AppError>;
}
