//! PostgreSQL implementation of the question repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{Difficulty, NewQuestion, Question, QuestionPatch, QuestionType};
use crate::domain::repositories::QuestionRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, topic_id, question_type, question_text, options, correct_answer, \
                       difficulty, created_at, deleted_at";

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    topic_id: i64,
    question_type: QuestionType,
    question_text: String,
    options: Vec<String>,
    correct_answer: String,
    difficulty: Difficulty,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Question {
            id: r.id,
            topic_id: r.topic_id,
            question_type: r.question_type,
            question_text: r.question_text,
            options: r.options,
            correct_answer: r.correct_answer,
            difficulty: r.difficulty,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgQuestionRepository {
    pool: Arc<PgPool>,
}

impl PgQuestionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_for_topic(&self, topic_id: i64, limit: i64) -> Result<Vec<Question>, AppError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE {NOT_DELETED} AND topic_id = $1 ORDER BY created_at DESC LIMIT $2"
        ))
        .bind(topic_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        let row: Option<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM questions WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Question::from))
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        let row: QuestionRow = sqlx::query_as(&format!(
            "INSERT INTO questions \
                (topic_id, question_type, question_text, options, correct_answer, difficulty) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(new_question.topic_id)
        .bind(new_question.question_type)
        .bind(new_question.question_text)
        .bind(new_question.options)
        .bind(new_question.correct_answer)
        .bind(new_question.difficulty)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: QuestionPatch) -> Result<Question, AppError> {
        let row: Option<QuestionRow> = sqlx::query_as(&format!(
            "UPDATE questions SET \
                question_type = COALESCE($2, question_type), \
                question_text = COALESCE($3, question_text), \
                options = COALESCE($4, options), \
                correct_answer = COALESCE($5, correct_answer), \
                difficulty = COALESCE($6, difficulty) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.question_type)
        .bind(patch.question_text)
        .bind(patch.options)
        .bind(patch.correct_answer)
        .bind(patch.difficulty)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Question::from).ok_or_else(|| {
            AppError::not_found("Question not found", serde_json::json!({ "id": id }))
        })
    }
}
