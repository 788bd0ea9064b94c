//! DTOs for learning progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{NewProgress, Progress};

/// Query parameters for `GET /api/progress`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub subject_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDto {
    pub id: i64,
    pub subject_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
    pub percent: i32,
    pub last_accessed: DateTime<Utc>,
}

impl From<Progress> for ProgressDto {
    fn from(p: Progress) -> Self {
        Self {
            id: p.id,
            subject_id: p.subject_id,
            chapter_id: p.chapter_id,
            topic_id: p.topic_id,
            percent: p.percent,
            last_accessed: p.last_accessed,
        }
    }
}

/// Body of `POST /api/progress`. A topic-level record must name its chapter.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProgressRequest {
    pub subject_id: i64,

    pub chapter_id: Option<i64>,

    pub topic_id: Option<i64>,

    #[validate(range(min = 0, max = 100))]
    pub percent: i32,
}

impl UpsertProgressRequest {
    pub fn into_new(self, user_id: String) -> NewProgress {
        NewProgress {
            user_id,
            subject_id: self.subject_id,
            chapter_id: self.chapter_id,
            topic_id: self.topic_id,
            percent: self.percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_out_of_range_rejected() {
        let req: UpsertProgressRequest =
            serde_json::from_str(r#"{"subjectId": 1, "percent": 101}"#).unwrap();
        assert!(req.validate().is_err());

        let req: UpsertProgressRequest =
            serde_json::from_str(r#"{"subjectId": 1, "percent": 100}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
