//! PostgreSQL implementation of the progress repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProgress, Progress};
use crate::domain::repositories::ProgressRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, user_id, subject_id, chapter_id, topic_id, percent, last_accessed";

#[derive(sqlx::FromRow)]
struct ProgressRow {
    id: i64,
    user_id: String,
    subject_id: i64,
    chapter_id: Option<i64>,
    topic_id: Option<i64>,
    percent: i32,
    last_accessed: DateTime<Utc>,
}

impl From<ProgressRow> for Progress {
    fn from(r: ProgressRow) -> Self {
        Progress {
            id: r.id,
            user_id: r.user_id,
            subject_id: r.subject_id,
            chapter_id: r.chapter_id,
            topic_id: r.topic_id,
            percent: r.percent,
            last_accessed: r.last_accessed,
        }
    }
}

pub struct PgProgressRepository {
    pool: Arc<PgPool>,
}

impl PgProgressRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressRepository for PgProgressRepository {
    async fn upsert(&self, new_progress: NewProgress) -> Result<Progress, AppError> {
        // Relies on the unique index over the (user, subject, chapter, topic)
        // key; concurrent upserts resolve last-write-wins atomically.
        let row: ProgressRow = sqlx::query_as(&format!(
            "INSERT INTO progress (user_id, subject_id, chapter_id, topic_id, percent, last_accessed) \
             VALUES ($1, $2, $3, $4, $5, NOW()) \
             ON CONFLICT (user_id, subject_id, COALESCE(chapter_id, 0), COALESCE(topic_id, 0)) \
             DO UPDATE SET percent = EXCLUDED.percent, last_accessed = NOW() \
             RETURNING {COLUMNS}"
        ))
        .bind(new_progress.user_id)
        .bind(new_progress.subject_id)
        .bind(new_progress.chapter_id)
        .bind(new_progress.topic_id)
        .bind(new_progress.percent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        subject_id: Option<i64>,
    ) -> Result<Vec<Progress>, AppError> {
        let rows: Vec<ProgressRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM progress \
             WHERE user_id = $1 AND ($2::bigint IS NULL OR subject_id = $2) \
             ORDER BY last_accessed DESC"
        ))
        .bind(user_id)
        .bind(subject_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Progress::from).collect())
    }
}
