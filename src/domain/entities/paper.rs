//! Previous-year and solved paper entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a paper is a raw previous-year paper or a solved one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "paper_kind", rename_all = "lowercase")]
pub enum PaperKind {
    Previous,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Paper {
    pub id: i64,
    pub exam_id: i64,
    pub kind: PaperKind,
    pub title: String,
    pub year: i32,
    pub file_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Paper {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
