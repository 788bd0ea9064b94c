//! Discount coupon entity.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub discount_percent: i32,
    pub is_active: bool,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewCoupon {
    pub code: String,
    pub discount_percent: i32,
    pub is_active: bool,
    pub valid_until: Option<DateTime<Utc>>,
}

/// Partial update; the primary use is the activation toggle.
#[derive(Debug, Clone, Default)]
pub struct CouponPatch {
    pub discount_percent: Option<i32>,
    pub is_active: Option<bool>,
    pub valid_until: Option<Option<DateTime<Utc>>>,
}
