//! Repository trait for coupon administration.

use async_trait::async_trait;

use crate::domain::entities::{Coupon, CouponPatch, NewCoupon};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Coupon>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the coupon code already exists.
    async fn create(&self, new_coupon: NewCoupon) -> Result<Coupon, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live coupon matches `id`.
    async fn update(&self, id: i64, patch: CouponPatch) -> Result<Coupon, AppError>;
}
