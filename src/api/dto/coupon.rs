//! DTOs for coupon administration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Coupon, CouponPatch, NewCoupon};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: i64,
    pub code: String,
    pub discount_percent: i32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

impl From<Coupon> for CouponDto {
    fn from(c: Coupon) -> Self {
        Self {
            id: c.id,
            code: c.code,
            discount_percent: c.discount_percent,
            is_active: c.is_active,
            valid_until: c.valid_until,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponRequest {
    #[validate(length(min = 3, max = 40))]
    pub code: String,

    #[validate(range(min = 1, max = 100))]
    pub discount_percent: i32,

    #[serde(default = "super::exam::default_true")]
    pub is_active: bool,

    pub valid_until: Option<DateTime<Utc>>,
}

impl From<CreateCouponRequest> for NewCoupon {
    fn from(req: CreateCouponRequest) -> Self {
        NewCoupon {
            code: req.code,
            discount_percent: req.discount_percent,
            is_active: req.is_active,
            valid_until: req.valid_until,
        }
    }
}

/// Partial update. `validUntil: null` clears the expiry when the key is
/// present.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCouponRequest {
    #[validate(range(min = 1, max = 100))]
    pub discount_percent: Option<i32>,

    pub is_active: Option<bool>,

    #[serde(default, with = "valid_until_option")]
    pub valid_until: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateCouponRequest> for CouponPatch {
    fn from(req: UpdateCouponRequest) -> Self {
        CouponPatch {
            discount_percent: req.discount_percent,
            is_active: req.is_active,
            valid_until: req.valid_until,
        }
    }
}

mod valid_until_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<DateTime<Utc>>::deserialize(deserializer).map(Some)
    }
}
