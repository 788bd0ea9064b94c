//! Per-user course access with a price snapshot taken at purchase time.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Computed access state for a user-course pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    Lifetime,
    Active,
    Expiring,
    Expired,
    None,
}

/// Days before expiry at which access is reported as `EXPIRING`.
pub const EXPIRY_WARNING_DAYS: i64 = 7;

/// A user's access record for one course.
///
/// Price fields are a snapshot from the moment of purchase, independent of the
/// course's current pricing.
#[derive(Debug, Clone)]
pub struct CourseAccess {
    pub id: i64,
    pub user_id: String,
    pub course_id: i64,
    pub lifetime: bool,
    pub is_free: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub price_base: i64,
    pub price_sale: Option<i64>,
    pub price_final: i64,
    pub currency: String,
    pub purchased_at: DateTime<Utc>,
}

impl CourseAccess {
    /// Access status as of `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> AccessStatus {
        if self.lifetime {
            return AccessStatus::Lifetime;
        }

        match self.expires_at {
            None => AccessStatus::None,
            Some(expiry) if expiry <= now => AccessStatus::Expired,
            Some(expiry) if expiry <= now + Duration::days(EXPIRY_WARNING_DAYS) => {
                AccessStatus::Expiring
            }
            Some(_) => AccessStatus::Active,
        }
    }

    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        matches!(
            self.status_at(now),
            AccessStatus::Lifetime | AccessStatus::Active | AccessStatus::Expiring
        )
    }
}

/// An access record joined with the course it grants.
#[derive(Debug, Clone)]
pub struct CourseAccessRecord {
    pub access: CourseAccess,
    pub course_name: String,
    pub course_slug: String,
}
