//! Repository trait for quiz access.

use async_trait::async_trait;

use crate::domain::entities::{NewQuiz, Quiz, QuizPatch, QuizType};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Lists active quizzes, optionally filtered by type and linked entity.
    async fn list(
        &self,
        quiz_type: Option<QuizType>,
        linked_entity_id: Option<i64>,
    ) -> Result<Vec<Quiz>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, AppError>;

    async fn create(&self, new_quiz: NewQuiz) -> Result<Quiz, AppError>;

    /// Partially updates a quiz.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live quiz matches `id`.
    async fn update(&self, id: i64, patch: QuizPatch) -> Result<Quiz, AppError>;
}
