//! Quiz catalog service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewQuiz, Quiz, QuizPatch, QuizType};
use crate::domain::repositories::QuizRepository;
use crate::error::AppError;

pub struct QuizService {
    quiz_repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(quiz_repository: Arc<dyn QuizRepository>) -> Self {
        Self { quiz_repository }
    }

    pub async fn list(
        &self,
        quiz_type: Option<QuizType>,
        linked_entity_id: Option<i64>,
    ) -> Result<Vec<Quiz>, AppError> {
        self.quiz_repository.list(quiz_type, linked_entity_id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live quiz matches `id`.
    pub async fn get(&self, id: i64) -> Result<Quiz, AppError> {
        self.quiz_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Quiz not found", json!({ "id": id })))
    }

    /// Creates a quiz.
    ///
    /// Topic, chapter and subject quizzes must name the entity they cover;
    /// full-syllabus and mock-test quizzes carry no link and any provided one
    /// is dropped.
    pub async fn create(&self, mut new_quiz: NewQuiz) -> Result<Quiz, AppError> {
        match new_quiz.quiz_type {
            QuizType::Topic | QuizType::Chapter | QuizType::Subject => {
                if new_quiz.linked_entity_id.is_none() {
                    return Err(AppError::bad_request(
                        "This quiz type requires linkedEntityId",
                        json!({ "type": new_quiz.quiz_type }),
                    ));
                }
            }
            QuizType::FullSyllabus | QuizType::MockTest => {
                new_quiz.linked_entity_id = None;
            }
        }

        self.quiz_repository.create(new_quiz).await
    }

    /// Partially updates a quiz.
    ///
    /// The link rule is checked against the patched state: a quiz ending up
    /// scoped (topic, chapter or subject) must still carry a link, and one
    /// ending up unscoped has its link cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live quiz matches `id`, or
    /// [`AppError::Validation`] if a scoped quiz would be left without a link.
    pub async fn update(&self, id: i64, mut patch: QuizPatch) -> Result<Quiz, AppError> {
        let current = self
            .quiz_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Quiz not found", json!({ "id": id })))?;

        let quiz_type = patch.quiz_type.unwrap_or(current.quiz_type);
        match quiz_type {
            QuizType::Topic | QuizType::Chapter | QuizType::Subject => {
                let link = match patch.linked_entity_id {
                    Some(link) => link,
                    None => current.linked_entity_id,
                };
                if link.is_none() {
                    return Err(AppError::bad_request(
                        "This quiz type requires linkedEntityId",
                        json!({ "type": quiz_type }),
                    ));
                }
            }
            QuizType::FullSyllabus | QuizType::MockTest => {
                patch.linked_entity_id = Some(None);
            }
        }

        self.quiz_repository.update(id, patch).await
    }
}
