//! Quiz entity: a timed question set linked to a syllabus level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scope of a quiz. Determines what `linked_entity_id` refers to; mock tests
/// and full-syllabus quizzes carry no link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "quiz_type", rename_all = "snake_case")]
pub enum QuizType {
    Topic,
    Chapter,
    Subject,
    FullSyllabus,
    MockTest,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub quiz_type: QuizType,
    pub linked_entity_id: Option<i64>,
    pub total_questions: i32,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input data for creating a quiz.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub title: String,
    pub quiz_type: QuizType,
    pub linked_entity_id: Option<i64>,
    pub total_questions: i32,
    pub duration_minutes: i32,
    pub is_active: bool,
}

/// Partial update for a quiz. `None` fields are left unchanged;
/// `linked_entity_id` distinguishes "leave as is" from "clear".
#[derive(Debug, Clone, Default)]
pub struct QuizPatch {
    pub title: Option<String>,
    pub quiz_type: Option<QuizType>,
    pub linked_entity_id: Option<Option<i64>>,
    pub total_questions: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub is_active: Option<bool>,
}
