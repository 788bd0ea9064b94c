//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{Course, CoursePatch, CourseType, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, exam_id, name, slug, course_type, base_price, sale_price, \
                       currency, is_free, is_active, created_at, deleted_at";

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    exam_id: i64,
    name: String,
    slug: String,
    course_type: CourseType,
    base_price: i64,
    sale_price: Option<i64>,
    currency: String,
    is_free: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course {
            id: r.id,
            exam_id: r.exam_id,
            name: r.name,
            slug: r.slug,
            course_type: r.course_type,
            base_price: r.base_price,
            sale_price: r.sale_price,
            currency: r.currency,
            is_free: r.is_free,
            is_active: r.is_active,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn list_for_exam(&self, exam_id: i64) -> Result<Vec<Course>, AppError> {
        let rows: Vec<CourseRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM courses \
             WHERE {NOT_DELETED} AND is_active AND exam_id = $1 ORDER BY name"
        ))
        .bind(exam_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, AppError> {
        let row: Option<CourseRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM courses WHERE {NOT_DELETED} AND slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row: Option<CourseRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM courses WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row: CourseRow = sqlx::query_as(&format!(
            "INSERT INTO courses \
                (exam_id, name, slug, course_type, base_price, sale_price, currency, is_free, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {COLUMNS}"
        ))
        .bind(new_course.exam_id)
        .bind(new_course.name)
        .bind(new_course.slug)
        .bind(new_course.course_type)
        .bind(new_course.base_price)
        .bind(new_course.sale_price)
        .bind(new_course.currency)
        .bind(new_course.is_free)
        .bind(new_course.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        // sale_price supports explicit clearing, so it gets a set-flag
        // instead of COALESCE.
        let set_sale = patch.sale_price.is_some();
        let sale_price = patch.sale_price.flatten();

        let row: Option<CourseRow> = sqlx::query_as(&format!(
            "UPDATE courses SET \
                name = COALESCE($2, name), \
                course_type = COALESCE($3, course_type), \
                base_price = COALESCE($4, base_price), \
                sale_price = CASE WHEN $5 THEN $6 ELSE sale_price END, \
                is_free = COALESCE($7, is_free), \
                is_active = COALESCE($8, is_active) \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.course_type)
        .bind(patch.base_price)
        .bind(set_sale)
        .bind(sale_price)
        .bind(patch.is_free)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Course::from).ok_or_else(|| {
            AppError::not_found("Course not found", serde_json::json!({ "id": id }))
        })
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(&format!(
            "UPDATE courses SET deleted_at = NOW() WHERE {NOT_DELETED} AND id = $1"
        ))
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
