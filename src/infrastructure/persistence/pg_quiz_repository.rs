//! PostgreSQL implementation of the quiz repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{NewQuiz, Quiz, QuizPatch, QuizType};
use crate::domain::repositories::QuizRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, title, quiz_type, linked_entity_id, total_questions, \
                       duration_minutes, is_active, created_at, deleted_at";

#[derive(sqlx::FromRow)]
struct QuizRow {
    id: i64,
    title: String,
    quiz_type: QuizType,
    linked_entity_id: Option<i64>,
    total_questions: i32,
    duration_minutes: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<QuizRow> for Quiz {
    fn from(r: QuizRow) -> Self {
        Quiz {
            id: r.id,
            title: r.title,
            quiz_type: r.quiz_type,
            linked_entity_id: r.linked_entity_id,
            total_questions: r.total_questions,
            duration_minutes: r.duration_minutes,
            is_active: r.is_active,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgQuizRepository {
    pool: Arc<PgPool>,
}

impl PgQuizRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn list(
        &self,
        quiz_type: Option<QuizType>,
        linked_entity_id: Option<i64>,
    ) -> Result<Vec<Quiz>, AppError> {
        let rows: Vec<QuizRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM quizzes \
             WHERE {NOT_DELETED} AND is_active \
               AND ($1::quiz_type IS NULL OR quiz_type = $1) \
               AND ($2::bigint IS NULL OR linked_entity_id = $2) \
             ORDER BY created_at DESC"
        ))
        .bind(quiz_type)
        .bind(linked_entity_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Quiz::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, AppError> {
        let row: Option<QuizRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM quizzes WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Quiz::from))
    }

    async fn create(&self, new_quiz: NewQuiz) -> Result<Quiz, AppError> {
        let row: QuizRow = sqlx::query_as(&format!(
            "INSERT INTO quizzes \
                (title, quiz_type, linked_entity_id, total_questions, duration_minutes, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(new_quiz.title)
        .bind(new_quiz.quiz_type)
        .bind(new_quiz.linked_entity_id)
        .bind(new_quiz.total_questions)
        .bind(new_quiz.duration_minutes)
        .bind(new_quiz.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: QuizPatch) -> Result<Quiz, AppError> {
        // linked_entity_id supports explicit clearing, so it gets a set-flag
        // instead of COALESCE.
        let set_link = patch.linked_entity_id.is_some();
        let linked_entity_id = patch.linked_entity_id.flatten();

        let row: Option<QuizRow> = sqlx::query_as(&format!(
            "UPDATE quizzes SET \
                title = COALESCE($2, title), \
                quiz_type = COALESCE($3, quiz_type), \
                linked_entity_id = CASE WHEN $4 THEN $5 ELSE linked_entity_id END, \
                total_questions = COALESCE($6, total_questions), \
                duration_minutes = COALESCE($7, duration_minutes), \
                is_active = COALESCE($8, is_active) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.quiz_type)
        .bind(set_link)
        .bind(linked_entity_id)
        .bind(patch.total_questions)
        .bind(patch.duration_minutes)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Quiz::from)
            .ok_or_else(|| AppError::not_found("Quiz not found", serde_json::json!({ "id": id })))
    }
}
