//! Question bank entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::syllabus::Difficulty;

/// Answer format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "question_type", rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    Numerical,
    TrueFalse,
}

/// A practice question attached to a topic.
///
/// `options` is empty for non-MCQ questions.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: i64,
    pub topic_id: i64,
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input data for creating a question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub topic_id: i64,
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
}

/// Partial update for a question. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub question_type: Option<QuestionType>,
    pub question_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub difficulty: Option<Difficulty>,
}
