//! Handlers for coupon administration.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::coupon::{CouponDto, CreateCouponRequest, UpdateCouponRequest};
use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/admin/coupons`
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<CouponDto>>, AppError> {
    let coupons = state.coupon_service.list().await?;
    Ok(Envelope::ok(
        coupons.into_iter().map(CouponDto::from).collect(),
    ))
}

/// `POST /api/admin/coupons`
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCouponRequest>,
) -> Result<Envelope<CouponDto>, AppError> {
    payload.validate()?;

    let coupon = state.coupon_service.create(payload.into()).await?;
    Ok(Envelope::created(coupon.into()))
}

/// `PATCH /api/admin/coupons/{id}`
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCouponRequest>,
) -> Result<Envelope<CouponDto>, AppError> {
    payload.validate()?;

    let coupon = state.coupon_service.update(id, payload.into()).await?;
    Ok(Envelope::ok(coupon.into()))
}
