//! DTOs for the "my courses" view: access records with computed status.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{AccessStatus, CourseAccessRecord};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPriceDto {
    pub base: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale: Option<i64>,
    #[serde(rename = "final")]
    pub final_price: i64,
    pub currency: String,
}

/// One purchased (or free-claimed) course in a user's library.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAccessDto {
    pub course_id: i64,
    pub course_name: String,
    pub course_slug: String,
    pub status: AccessStatus,
    pub lifetime: bool,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub price: AccessPriceDto,
    pub purchased_at: DateTime<Utc>,
}

impl CourseAccessDto {
    /// Builds the DTO with the status evaluated at `now`.
    pub fn from_record(record: CourseAccessRecord, now: DateTime<Utc>) -> Self {
        let access = record.access;
        Self {
            course_id: access.course_id,
            course_name: record.course_name,
            course_slug: record.course_slug,
            status: access.status_at(now),
            lifetime: access.lifetime,
            is_free: access.is_free,
            expires_at: access.expires_at,
            price: AccessPriceDto {
                base: access.price_base,
                sale: access.price_sale,
                final_price: access.price_final,
                currency: access.currency,
            },
            purchased_at: access.purchased_at,
        }
    }
}
