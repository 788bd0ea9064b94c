//! Repository trait for question bank access.

use async_trait::async_trait;

use crate::domain::entities::{NewQuestion, Question, QuestionPatch};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Lists questions for a topic, newest first, capped at `limit`.
    async fn list_for_topic(&self, topic_id: i64, limit: i64) -> Result<Vec<Question>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError>;

    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError>;

    /// Partially updates a question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live question matches `id`.
    async fn update(&self, id: i64, patch: QuestionPatch) -> Result<Question, AppError>;
}
