//! DTOs for previous-year and solved papers.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::Paper;

/// Query parameters for the paper listings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub exam_id: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDto {
    pub id: i64,
    pub exam_id: i64,
    pub title: String,
    pub year: i32,
    pub is_active: bool,
}

impl From<Paper> for PaperDto {
    fn from(p: Paper) -> Self {
        Self {
            id: p.id,
            exam_id: p.exam_id,
            title: p.title,
            year: p.year,
            is_active: p.is_active,
        }
    }
}

/// Returned by the download endpoint; the file URL is only exposed here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDownloadDto {
    pub id: i64,
    pub title: String,
    pub file_url: String,
}

impl From<Paper> for PaperDownloadDto {
    fn from(p: Paper) -> Self {
        Self {
            id: p.id,
            title: p.title,
            file_url: p.file_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_query_parses() {
        let q: PaperQuery = serde_urlencoded::from_str("examId=2&year=2023").unwrap();
        assert_eq!(q.exam_id, Some(2));
        assert_eq!(q.year, Some(2023));

        let q: PaperQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(q.exam_id, None);
    }

    #[test]
    fn test_listing_dto_omits_file_url() {
        use chrono::Utc;
        use crate::domain::entities::PaperKind;

        let dto = PaperDto::from(Paper {
            id: 1,
            exam_id: 2,
            kind: PaperKind::Previous,
            title: "JEE Main 2023".to_string(),
            year: 2023,
            file_url: "https://cdn.example.com/p/1.pdf".to_string(),
            is_active: true,
            created_at: Utc::now(),
            deleted_at: None,
        });

        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("fileUrl").is_none());
        assert_eq!(body["year"], 2023);
    }
}
