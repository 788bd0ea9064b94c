//! Question bank service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewQuestion, Question, QuestionPatch, QuestionType};
use crate::domain::repositories::QuestionRepository;
use crate::error::AppError;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

pub struct QuestionService {
    question_repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(question_repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            question_repository,
        }
    }

    /// Questions for a topic, newest first. `limit` defaults to 20 and is
    /// capped at 100.
    pub async fn list_for_topic(
        &self,
        topic_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<Question>, AppError> {
        let limit = (limit.map_or(DEFAULT_LIMIT, i64::from)).clamp(1, MAX_LIMIT);
        self.question_repository.list_for_topic(topic_id, limit).await
    }

    /// Creates a question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if an MCQ carries fewer than two
    /// options, or a non-MCQ carries any.
    pub async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        Self::check_options(new_question.question_type, &new_question.options)?;
        self.question_repository.create(new_question).await
    }

    /// Partially updates a question.
    ///
    /// The type/options invariant is checked against the patched state, so a
    /// patch can neither strip an MCQ down to one option nor attach options
    /// to a numerical question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live question matches `id`, or
    /// [`AppError::Validation`] if the patched state breaks the invariant.
    pub async fn update(&self, id: i64, patch: QuestionPatch) -> Result<Question, AppError> {
        let current = self
            .question_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found", json!({ "id": id })))?;

        let question_type = patch.question_type.unwrap_or(current.question_type);
        let options = patch.options.as_ref().unwrap_or(&current.options);
        Self::check_options(question_type, options)?;

        self.question_repository.update(id, patch).await
    }

    fn check_options(question_type: QuestionType, options: &[String]) -> Result<(), AppError> {
        match question_type {
            QuestionType::Mcq if options.len() < 2 => Err(AppError::bad_request(
                "An MCQ needs at least two options",
                json!({ "options": options.len() }),
            )),
            QuestionType::Numerical | QuestionType::TrueFalse if !options.is_empty() => {
                Err(AppError::bad_request(
                    "Options are only valid for MCQ questions",
                    json!({ "type": question_type }),
                ))
            }
            _ => Ok(()),
        }
    }
}
