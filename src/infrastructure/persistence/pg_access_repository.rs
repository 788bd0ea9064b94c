//! PostgreSQL implementation of the course-access repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{CourseAccess, CourseAccessRecord};
use crate::domain::repositories::AccessRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AccessRow {
    id: i64,
    user_id: String,
    course_id: i64,
    lifetime: bool,
    is_free: bool,
    expires_at: Option<DateTime<Utc>>,
    price_base: i64,
    price_sale: Option<i64>,
    price_final: i64,
    currency: String,
    purchased_at: DateTime<Utc>,
}

impl From<AccessRow> for CourseAccess {
    fn from(r: AccessRow) -> Self {
        CourseAccess {
            id: r.id,
            user_id: r.user_id,
            course_id: r.course_id,
            lifetime: r.lifetime,
            is_free: r.is_free,
            expires_at: r.expires_at,
            price_base: r.price_base,
            price_sale: r.price_sale,
            price_final: r.price_final,
            currency: r.currency,
            purchased_at: r.purchased_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AccessRecordRow {
    #[sqlx(flatten)]
    access: AccessRow,
    course_name: String,
    course_slug: String,
}

const ACCESS_COLUMNS: &str = "a.id, a.user_id, a.course_id, a.lifetime, a.is_free, \
    a.expires_at, a.price_base, a.price_sale, a.price_final, a.currency, a.purchased_at";

pub struct PgAccessRepository {
    pool: Arc<PgPool>,
}

impl PgAccessRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessRepository for PgAccessRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CourseAccessRecord>, AppError> {
        let rows: Vec<AccessRecordRow> = sqlx::query_as(&format!(
            "SELECT {ACCESS_COLUMNS}, c.name AS course_name, c.slug AS course_slug \
             FROM course_access a \
             JOIN courses c ON c.id = a.course_id \
             WHERE c.deleted_at IS NULL AND a.user_id = $1 \
             ORDER BY a.purchased_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CourseAccessRecord {
                access: r.access.into(),
                course_name: r.course_name,
                course_slug: r.course_slug,
            })
            .collect())
    }

    async fn find_current_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CourseAccess>, AppError> {
        let row: Option<AccessRow> = sqlx::query_as(&format!(
            "SELECT {ACCESS_COLUMNS} FROM course_access a \
             JOIN courses c ON c.id = a.course_id \
             WHERE c.deleted_at IS NULL AND a.user_id = $1 \
               AND (a.lifetime OR a.expires_at > NOW()) \
             ORDER BY a.purchased_at DESC LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CourseAccess::from))
    }
}
