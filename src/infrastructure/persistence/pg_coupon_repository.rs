//! PostgreSQL implementation of the coupon repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::NOT_DELETED;
use crate::domain::entities::{Coupon, CouponPatch, NewCoupon};
use crate::domain::repositories::CouponRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, code, discount_percent, is_active, valid_until, created_at, deleted_at";

#[derive(sqlx::FromRow)]
struct CouponRow {
    id: i64,
    code: String,
    discount_percent: i32,
    is_active: bool,
    valid_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CouponRow> for Coupon {
    fn from(r: CouponRow) -> Self {
        Coupon {
            id: r.id,
            code: r.code,
            discount_percent: r.discount_percent,
            is_active: r.is_active,
            valid_until: r.valid_until,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

pub struct PgCouponRepository {
    pool: Arc<PgPool>,
}

impl PgCouponRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponRepository for PgCouponRepository {
    async fn list(&self) -> Result<Vec<Coupon>, AppError> {
        let rows: Vec<CouponRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM coupons WHERE {NOT_DELETED} ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Coupon::from).collect())
    }

    async fn create(&self, new_coupon: NewCoupon) -> Result<Coupon, AppError> {
        let row: CouponRow = sqlx::query_as(&format!(
            "INSERT INTO coupons (code, discount_percent, is_active, valid_until) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(new_coupon.code)
        .bind(new_coupon.discount_percent)
        .bind(new_coupon.is_active)
        .bind(new_coupon.valid_until)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: CouponPatch) -> Result<Coupon, AppError> {
        let set_valid_until = patch.valid_until.is_some();
        let valid_until = patch.valid_until.flatten();

        let row: Option<CouponRow> = sqlx::query_as(&format!(
            "UPDATE coupons SET \
                discount_percent = COALESCE($2, discount_percent), \
                is_active = COALESCE($3, is_active), \
                valid_until = CASE WHEN $4 THEN $5 ELSE valid_until END \
             WHERE {NOT_DELETED} AND id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.discount_percent)
        .bind(patch.is_active)
        .bind(set_valid_until)
        .bind(valid_until)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Coupon::from).ok_or_else(|| {
            AppError::not_found("Coupon not found", serde_json::json!({ "id": id }))
        })
    }
}
