//! PostgreSQL implementation of the exam repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{Exam, ExamPatch, ExamType, NewExam};
use crate::domain::repositories::ExamRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, name, exam_type, conducted_by, is_active, created_at, deleted_at";

#[derive(sqlx::FromRow)]
struct ExamRow {
    id: i64,
    name: String,
    exam_type: ExamType,
    conducted_by: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ExamRow> for Exam {
    fn from(r: ExamRow) -> Self {
        Exam {
            id: r.id,
            name: r.name,
            exam_type: r.exam_type,
            conducted_by: r.conducted_by,
            is_active: r.is_active,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgExamRepository {
    pool: Arc<PgPool>,
}

impl PgExamRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExamRepository for PgExamRepository {
    async fn list_public(&self) -> Result<Vec<Exam>, AppError> {
        let rows: Vec<ExamRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM exams WHERE {NOT_DELETED} AND is_active ORDER BY name"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Exam::from).collect())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Exam>, AppError> {
        let rows: Vec<ExamRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM exams \
             WHERE {NOT_DELETED} AND ($3::text IS NULL OR name ILIKE '%' || $3 || '%') \
             ORDER BY name LIMIT $2 OFFSET $1"
        ))
        .bind(offset)
        .bind(limit)
        .bind(search)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Exam::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>, AppError> {
        let row: Option<ExamRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM exams WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Exam::from))
    }

    async fn create(&self, new_exam: NewExam) -> Result<Exam, AppError> {
        let row: ExamRow = sqlx::query_as(&format!(
            "INSERT INTO exams (name, exam_type, conducted_by, is_active) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(new_exam.name)
        .bind(new_exam.exam_type)
        .bind(new_exam.conducted_by)
        .bind(new_exam.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: ExamPatch) -> Result<Exam, AppError> {
        let row: Option<ExamRow> = sqlx::query_as(&format!(
            "UPDATE exams SET \
                name = COALESCE($2, name), \
                exam_type = COALESCE($3, exam_type), \
                conducted_by = COALESCE($4, conducted_by), \
                is_active = COALESCE($5, is_active) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.exam_type)
        .bind(patch.conducted_by)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Exam::from).ok_or_else(|| {
            AppError::not_found("Exam not found", serde_json::json!({ "id": id }))
        })
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(&format!(
            "UPDATE exams SET deleted_at = NOW() WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
