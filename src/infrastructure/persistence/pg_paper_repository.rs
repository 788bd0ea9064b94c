//! PostgreSQL implementation of the paper repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{Paper, PaperKind};
use crate::domain::repositories::PaperRepository;
use crate::error::AppError;

const COLUMNS: &str =
    "id, exam_id, kind, title, year, file_url, is_active, created_at, deleted_at";

#[derive(sqlx::FromRow)]
struct PaperRow {
    id: i64,
    exam_id: i64,
    kind: PaperKind,
    year: i32,
    title: String,
    file_url: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<PaperRow> for Paper {
    fn from(r: PaperRow) -> Self {
        Paper {
            id: r.id,
            exam_id: r.exam_id,
            kind: r.kind,
            title: r.title,
            year: r.year,
            file_url: r.file_url,
            is_active: r.is_active,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgPaperRepository {
    pool: Arc<PgPool>,
}

impl PgPaperRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaperRepository for PgPaperRepository {
    async fn list(
        &self,
        kind: PaperKind,
        exam_id: i64,
        year: Option<i32>,
    ) -> Result<Vec<Paper>, AppError> {
        let rows: Vec<PaperRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM papers \
             WHERE {NOT_DELETED} AND is_active AND kind = $1 AND exam_id = $2 \
               AND ($3::int IS NULL OR year = $3) \
             ORDER BY year DESC, title"
        ))
        .bind(kind)
        .bind(exam_id)
        .bind(year)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Paper::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Paper>, AppError> {
        let row: Option<PaperRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM papers WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Paper::from))
    }

    async fn record_download(&self, paper_id: i64, user_id: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO paper_downloads (paper_id, user_id) VALUES ($1, $2)")
            .bind(paper_id)
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
