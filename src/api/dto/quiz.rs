//! DTOs for quizzes.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{NewQuiz, Quiz, QuizPatch, QuizType};

/// Query parameters for `GET /api/quiz`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizListQuery {
    #[serde(rename = "type", default)]
    pub quiz_type: Option<QuizType>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub linked_entity_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDto {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub quiz_type: QuizType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_entity_id: Option<i64>,
    pub total_questions: i32,
    pub duration_minutes: i32,
    pub is_active: bool,
}

impl From<Quiz> for QuizDto {
    fn from(q: Quiz) -> Self {
        Self {
            id: q.id,
            title: q.title,
            quiz_type: q.quiz_type,
            linked_entity_id: q.linked_entity_id,
            total_questions: q.total_questions,
            duration_minutes: q.duration_minutes,
            is_active: q.is_active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 2, max = 160))]
    pub title: String,

    #[serde(rename = "type")]
    pub quiz_type: QuizType,

    pub linked_entity_id: Option<i64>,

    #[validate(range(min = 1, max = 500))]
    pub total_questions: i32,

    #[validate(range(min = 1, max = 600))]
    pub duration_minutes: i32,

    #[serde(default = "super::exam::default_true")]
    pub is_active: bool,
}

impl From<CreateQuizRequest> for NewQuiz {
    fn from(req: CreateQuizRequest) -> Self {
        NewQuiz {
            title: req.title,
            quiz_type: req.quiz_type,
            linked_entity_id: req.linked_entity_id,
            total_questions: req.total_questions,
            duration_minutes: req.duration_minutes,
            is_active: req.is_active,
        }
    }
}

/// Partial update. `linkedEntityId: null` clears the link when the key is
/// present.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizRequest {
    #[validate(length(min = 2, max = 160))]
    pub title: Option<String>,

    #[serde(rename = "type", default)]
    pub quiz_type: Option<QuizType>,

    #[serde(default, with = "linked_entity_id_option")]
    pub linked_entity_id: Option<Option<i64>>,

    #[validate(range(min = 1, max = 500))]
    pub total_questions: Option<i32>,

    #[validate(range(min = 1, max = 600))]
    pub duration_minutes: Option<i32>,

    pub is_active: Option<bool>,
}

impl From<UpdateQuizRequest> for QuizPatch {
    fn from(req: UpdateQuizRequest) -> Self {
        QuizPatch {
            title: req.title,
            quiz_type: req.quiz_type,
            linked_entity_id: req.linked_entity_id,
            total_questions: req.total_questions,
            duration_minutes: req.duration_minutes,
            is_active: req.is_active,
        }
    }
}

mod linked_entity_id_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(Some)
    }
}
