//! Course entity: a purchasable offering under an exam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of course offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "course_type")]
pub enum CourseType {
    #[sqlx(rename = "FULL")]
    Full,
    #[sqlx(rename = "CRASH")]
    Crash,
    #[sqlx(rename = "TEST_SERIES")]
    TestSeries,
}

/// A course belonging to an exam.
///
/// Prices are stored in minor currency units (paise/cents). `sale_price`
/// overrides `base_price` when present.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: i64,
    pub exam_id: i64,
    pub name: String,
    pub slug: String,
    pub course_type: CourseType,
    pub base_price: i64,
    pub sale_price: Option<i64>,
    pub currency: String,
    pub is_free: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Effective price after applying the sale price, if any.
    pub fn final_price(&self) -> i64 {
        if self.is_free {
            return 0;
        }
        self.sale_price.unwrap_or(self.base_price)
    }

    /// Whole-percent discount of the final price against the base price.
    pub fn discount_percent(&self) -> i64 {
        if self.base_price <= 0 {
            return 0;
        }
        let final_price = self.final_price();
        ((self.base_price - final_price) * 100) / self.base_price
    }
}

/// Input data for creating a course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub exam_id: i64,
    pub name: String,
    pub slug: String,
    pub course_type: CourseType,
    pub base_price: i64,
    pub sale_price: Option<i64>,
    pub currency: String,
    pub is_free: bool,
    pub is_active: bool,
}

/// Partial update for a course. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub course_type: Option<CourseType>,
    pub base_price: Option<i64>,
    pub sale_price: Option<Option<i64>>,
    pub is_free: Option<bool>,
    pub is_active: Option<bool>,
}
