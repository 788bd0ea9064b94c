//! DTOs for course endpoints, including computed pricing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Course, CoursePatch, CourseType, NewCourse};

/// Compiled regex for slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Query parameters for `GET /api/course`.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub exam_id: i64,
}

/// Pricing block computed from the stored base/sale pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub base: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale: Option<i64>,
    #[serde(rename = "final")]
    pub final_price: i64,
    pub currency: String,
    pub discount_percent: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub exam_id: i64,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub price: PriceDto,
    pub is_free: bool,
    pub is_active: bool,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        let price = PriceDto {
            base: course.base_price,
            sale: course.sale_price,
            final_price: course.final_price(),
            currency: course.currency.clone(),
            discount_percent: course.discount_percent(),
        };

        Self {
            id: course.id,
            exam_id: course.exam_id,
            name: course.name,
            slug: course.slug,
            course_type: course.course_type,
            price,
            is_free: course.is_free,
            is_active: course.is_active,
        }
    }
}

/// Body of `POST /api/course/byslug`.
#[derive(Debug, Deserialize, Validate)]
pub struct SlugRequest {
    #[validate(length(min = 3, max = 60))]
    #[validate(regex(path = "*SLUG_REGEX"))]
    pub slug: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub exam_id: i64,

    #[validate(length(min = 2, max = 160))]
    pub name: String,

    #[validate(length(min = 3, max = 60))]
    #[validate(regex(path = "*SLUG_REGEX"))]
    pub slug: String,

    #[serde(rename = "type")]
    pub course_type: CourseType,

    #[validate(range(min = 0))]
    pub base_price: i64,

    #[validate(range(min = 0))]
    pub sale_price: Option<i64>,

    #[validate(length(equal = 3))]
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub is_free: bool,

    #[serde(default = "super::exam::default_true")]
    pub is_active: bool,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        NewCourse {
            exam_id: req.exam_id,
            name: req.name,
            slug: req.slug,
            course_type: req.course_type,
            base_price: req.base_price,
            sale_price: req.sale_price,
            currency: req.currency,
            is_free: req.is_free,
            is_active: req.is_active,
        }
    }
}

/// Partial update payload. `salePrice: null` clears the sale price when the
/// key is present.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 2, max = 160))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub course_type: Option<CourseType>,

    #[validate(range(min = 0))]
    pub base_price: Option<i64>,

    #[serde(default, with = "double_option")]
    pub sale_price: Option<Option<i64>>,

    pub is_free: Option<bool>,

    pub is_active: Option<bool>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        CoursePatch {
            name: req.name,
            course_type: req.course_type,
            base_price: req.base_price,
            sale_price: req.sale_price,
            is_free: req.is_free,
            is_active: req.is_active,
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`) for clearable fields.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(Some)
    }
}
