//! DTOs for the question bank.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{Difficulty, NewQuestion, Question, QuestionPatch, QuestionType};

/// Query parameters for `GET /api/question`.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub topic_id: i64,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Wire representation of a question. The correct answer is included; the
/// bank serves practice material, not proctored exams.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i64,
    pub topic_id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            topic_id: q.topic_id,
            question_type: q.question_type,
            question_text: q.question_text,
            options: q.options,
            correct_answer: q.correct_answer,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub topic_id: i64,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    #[validate(length(min = 5, max = 4000))]
    pub question_text: String,

    #[serde(default)]
    pub options: Vec<String>,

    #[validate(length(min = 1, max = 400))]
    pub correct_answer: String,

    pub difficulty: Difficulty,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        NewQuestion {
            topic_id: req.topic_id,
            question_type: req.question_type,
            question_text: req.question_text,
            options: req.options,
            correct_answer: req.correct_answer,
            difficulty: req.difficulty,
        }
    }
}

/// Partial update. Omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,

    #[validate(length(min = 5, max = 4000))]
    pub question_text: Option<String>,

    pub options: Option<Vec<String>>,

    #[validate(length(min = 1, max = 400))]
    pub correct_answer: Option<String>,

    pub difficulty: Option<Difficulty>,
}

impl From<UpdateQuestionRequest> for QuestionPatch {
    fn from(req: UpdateQuestionRequest) -> Self {
        QuestionPatch {
            question_type: req.question_type,
            question_text: req.question_text,
            options: req.options,
            correct_answer: req.correct_answer,
            difficulty: req.difficulty,
        }
    }
}
