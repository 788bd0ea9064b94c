//! PostgreSQL implementation of the syllabus repository.
//!
//! Multilingual names are stored as `name_en`/`name_hi` column pairs and
//! reassembled into [`LocalizedText`] here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{
    Chapter, ChapterPatch, Difficulty, NewChapter, NewSubject, NewTopic, Subject, SubjectPatch,
    Syllabus, Topic, TopicPatch,
};
use crate::domain::lang::LocalizedText;
use crate::domain::repositories::SyllabusRepository;
use crate::error::AppError;

const SUBJECT_COLUMNS: &str =
    "id, syllabus_id, name_en, name_hi, sort_order, is_active, deleted_at";
const CHAPTER_COLUMNS: &str =
    "id, subject_id, chapter_number, name_en, name_hi, sort_order, deleted_at";
const TOPIC_COLUMNS: &str =
    "id, chapter_id, name_en, name_hi, difficulty, is_core_topic, deleted_at";

#[derive(sqlx::FromRow)]
struct SyllabusRow {
    id: i64,
    exam_id: i64,
    course_id: i64,
    academic_year: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<SyllabusRow> for Syllabus {
    fn from(r: SyllabusRow) -> Self {
        Syllabus {
            id: r.id,
            exam_id: r.exam_id,
            course_id: r.course_id,
            academic_year: r.academic_year,
            is_active: r.is_active,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubjectRow {
    id: i64,
    syllabus_id: i64,
    name_en: String,
    name_hi: Option<String>,
    sort_order: i32,
    is_active: bool,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<SubjectRow> for Subject {
    fn from(r: SubjectRow) -> Self {
        Subject {
            id: r.id,
            syllabus_id: r.syllabus_id,
            name: LocalizedText {
                en: r.name_en,
                hi: r.name_hi,
            },
            order: r.sort_order,
            is_active: r.is_active,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ChapterRow {
    id: i64,
    subject_id: i64,
    chapter_number: i32,
    name_en: String,
    name_hi: Option<String>,
    sort_order: i32,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ChapterRow> for Chapter {
    fn from(r: ChapterRow) -> Self {
        Chapter {
            id: r.id,
            subject_id: r.subject_id,
            chapter_number: r.chapter_number,
            name: LocalizedText {
                en: r.name_en,
                hi: r.name_hi,
            },
            order: r.sort_order,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TopicRow {
    id: i64,
    chapter_id: i64,
    name_en: String,
    name_hi: Option<String>,
    difficulty: Difficulty,
    is_core_topic: bool,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<TopicRow> for Topic {
    fn from(r: TopicRow) -> Self {
        Topic {
            id: r.id,
            chapter_id: r.chapter_id,
            name: LocalizedText {
                en: r.name_en,
                hi: r.name_hi,
            },
            difficulty: r.difficulty,
            is_core_topic: r.is_core_topic,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgSyllabusRepository {
    pool: Arc<PgPool>,
}

impl PgSyllabusRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SyllabusRepository for PgSyllabusRepository {
    async fn find_active(
        &self,
        exam_id: i64,
        course_id: i64,
        academic_year: Option<i32>,
    ) -> Result<Option<Syllabus>, AppError> {
        let row: Option<SyllabusRow> = sqlx::query_as(&format!(
            "SELECT id, exam_id, course_id, academic_year, is_active, created_at, deleted_at \
             FROM syllabi \
             WHERE {NOT_DELETED} AND is_active AND exam_id = $1 AND course_id = $2 \
               AND ($3::int IS NULL OR academic_year = $3) \
             ORDER BY academic_year DESC LIMIT 1"
        ))
        .bind(exam_id)
        .bind(course_id)
        .bind(academic_year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Syllabus::from))
    }

    async fn list_subjects(&self, syllabus_id: i64) -> Result<Vec<Subject>, AppError> {
        let rows: Vec<SubjectRow> = sqlx::query_as(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects \
             WHERE {NOT_DELETED} AND is_active AND syllabus_id = $1 ORDER BY sort_order"
        ))
        .bind(syllabus_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Subject::from).collect())
    }

    async fn list_chapters(&self, subject_id: i64) -> Result<Vec<Chapter>, AppError> {
        let rows: Vec<ChapterRow> = sqlx::query_as(&format!(
            "SELECT {CHAPTER_COLUMNS} FROM chapters \
             WHERE {NOT_DELETED} AND subject_id = $1 ORDER BY sort_order"
        ))
        .bind(subject_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Chapter::from).collect())
    }

    async fn list_topics(&self, chapter_id: i64) -> Result<Vec<Topic>, AppError> {
        let rows: Vec<TopicRow> = sqlx::query_as(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics \
             WHERE {NOT_DELETED} AND chapter_id = $1 ORDER BY id"
        ))
        .bind(chapter_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn list_chapters_for_syllabus(
        &self,
        syllabus_id: i64,
    ) -> Result<Vec<Chapter>, AppError> {
        let rows: Vec<ChapterRow> = sqlx::query_as(
            "SELECT c.id, c.subject_id, c.chapter_number, c.name_en, c.name_hi, \
                    c.sort_order, c.deleted_at \
             FROM chapters c \
             JOIN subjects s ON s.id = c.subject_id \
             WHERE c.deleted_at IS NULL AND s.deleted_at IS NULL AND s.syllabus_id = $1 \
             ORDER BY s.sort_order, c.sort_order",
        )
        .bind(syllabus_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Chapter::from).collect())
    }

    async fn list_topics_for_syllabus(&self, syllabus_id: i64) -> Result<Vec<Topic>, AppError> {
        let rows: Vec<TopicRow> = sqlx::query_as(
            "SELECT t.id, t.chapter_id, t.name_en, t.name_hi, t.difficulty, \
                    t.is_core_topic, t.deleted_at \
             FROM topics t \
             JOIN chapters c ON c.id = t.chapter_id \
             JOIN subjects s ON s.id = c.subject_id \
             WHERE t.deleted_at IS NULL AND c.deleted_at IS NULL AND s.deleted_at IS NULL \
               AND s.syllabus_id = $1 \
             ORDER BY s.sort_order, c.sort_order, t.id",
        )
        .bind(syllabus_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn create_subject(&self, new_subject: NewSubject) -> Result<Subject, AppError> {
        let row: SubjectRow = sqlx::query_as(&format!(
            "INSERT INTO subjects (syllabus_id, name_en, name_hi, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {SUBJECT_COLUMNS}"
        ))
        .bind(new_subject.syllabus_id)
        .bind(new_subject.name.en)
        .bind(new_subject.name.hi)
        .bind(new_subject.order)
        .bind(new_subject.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_subject(&self, id: i64, patch: SubjectPatch) -> Result<Subject, AppError> {
        let (name_en, name_hi) = split_name(patch.name);

        let row: Option<SubjectRow> = sqlx::query_as(&format!(
            "UPDATE subjects SET \
                name_en = COALESCE($2, name_en), \
                name_hi = COALESCE($3, name_hi), \
                sort_order = COALESCE($4, sort_order), \
                is_active = COALESCE($5, is_active) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {SUBJECT_COLUMNS}"
        ))
        .bind(id)
        .bind(name_en)
        .bind(name_hi)
        .bind(patch.order)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Subject::from).ok_or_else(|| {
            AppError::not_found("Subject not found", serde_json::json!({ "id": id }))
        })
    }

    async fn create_chapter(&self, new_chapter: NewChapter) -> Result<Chapter, AppError> {
        let row: ChapterRow = sqlx::query_as(&format!(
            "INSERT INTO chapters (subject_id, chapter_number, name_en, name_hi, sort_order) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {CHAPTER_COLUMNS}"
        ))
        .bind(new_chapter.subject_id)
        .bind(new_chapter.chapter_number)
        .bind(new_chapter.name.en)
        .bind(new_chapter.name.hi)
        .bind(new_chapter.order)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_chapter(&self, id: i64, patch: ChapterPatch) -> Result<Chapter, AppError> {
        let (name_en, name_hi) = split_name(patch.name);

        let row: Option<ChapterRow> = sqlx::query_as(&format!(
            "UPDATE chapters SET \
                chapter_number = COALESCE($2, chapter_number), \
                name_en = COALESCE($3, name_en), \
                name_hi = COALESCE($4, name_hi), \
                sort_order = COALESCE($5, sort_order) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {CHAPTER_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.chapter_number)
        .bind(name_en)
        .bind(name_hi)
        .bind(patch.order)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Chapter::from).ok_or_else(|| {
            AppError::not_found("Chapter not found", serde_json::json!({ "id": id }))
        })
    }

    async fn create_topic(&self, new_topic: NewTopic) -> Result<Topic, AppError> {
        let row: TopicRow = sqlx::query_as(&format!(
            "INSERT INTO topics (chapter_id, name_en, name_hi, difficulty, is_core_topic) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {TOPIC_COLUMNS}"
        ))
        .bind(new_topic.chapter_id)
        .bind(new_topic.name.en)
        .bind(new_topic.name.hi)
        .bind(new_topic.difficulty)
        .bind(new_topic.is_core_topic)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_topic(&self, id: i64, patch: TopicPatch) -> Result<Topic, AppError> {
        let (name_en, name_hi) = split_name(patch.name);

        let row: Option<TopicRow> = sqlx::query_as(&format!(
            "UPDATE topics SET \
                name_en = COALESCE($2, name_en), \
                name_hi = COALESCE($3, name_hi), \
                difficulty = COALESCE($4, difficulty), \
                is_core_topic = COALESCE($5, is_core_topic) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {TOPIC_COLUMNS}"
        ))
        .bind(id)
        .bind(name_en)
        .bind(name_hi)
        .bind(patch.difficulty)
        .bind(patch.is_core_topic)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Topic::from).ok_or_else(|| {
            AppError::not_found("Topic not found", serde_json::json!({ "id": id }))
        })
    }
}

fn split_name(name: Option<LocalizedText>) -> (Option<String>, Option<String>) {
    match name {
        Some(n) => (Some(n.en), n.hi),
        None => (None, None),
    }
}
