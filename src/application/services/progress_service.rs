//! Learning-progress service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewProgress, Progress};
use crate::domain::repositories::ProgressRepository;
use crate::error::AppError;

pub struct ProgressService {
    progress_repository: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(progress_repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            progress_repository,
        }
    }

    /// Upserts progress at a syllabus position. Last write wins; the store
    /// guarantees no duplicate rows under concurrent updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a topic-level record that does
    /// not name its chapter.
    pub async fn record(&self, new_progress: NewProgress) -> Result<Progress, AppError> {
        if new_progress.topic_id.is_some() && new_progress.chapter_id.is_none() {
            return Err(AppError::bad_request(
                "Topic progress requires chapterId",
                json!({ "topicId": new_progress.topic_id }),
            ));
        }

        self.progress_repository.upsert(new_progress).await
    }

    pub async fn list(
        &self,
        user_id: &str,
        subject_id: Option<i64>,
    ) -> Result<Vec<Progress>, AppError> {
        self.progress_repository.list_for_user(user_id, subject_id).await
    }
}
