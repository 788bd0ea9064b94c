//! Coupon administration service.

use std::sync::Arc;

use crate::domain::entities::{Coupon, CouponPatch, NewCoupon};
use crate::domain::repositories::CouponRepository;
use crate::error::AppError;

pub struct CouponService {
    coupon_repository: Arc<dyn CouponRepository>,
}

impl CouponService {
    pub fn new(coupon_repository: Arc<dyn CouponRepository>) -> Self {
        Self { coupon_repository }
    }

    pub async fn list(&self) -> Result<Vec<Coupon>, AppError> {
        self.coupon_repository.list().await
    }

    /// Creates a coupon. Codes are stored uppercased so lookups are
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    pub async fn create(&self, mut new_coupon: NewCoupon) -> Result<Coupon, AppError> {
        new_coupon.code = new_coupon.code.trim().to_ascii_uppercase();
        self.coupon_repository.create(new_coupon).await
    }

    pub async fn update(&self, id: i64, patch: CouponPatch) -> Result<Coupon, AppError> {
        self.coupon_repository.update(id, patch).await
    }
}
