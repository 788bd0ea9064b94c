//! Exam entity: the top-level catalog unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "exam_type", rename_all = "lowercase")]
pub enum ExamType {
    Board,
    Competitive,
    University,
}

/// An exam in the catalog.
///
/// `deleted_at` implements soft deletion: list queries never return rows
/// where it is set.
#[derive(Debug, Clone)]
pub struct Exam {
    pub id: i64,
    pub name: String,
    pub exam_type: ExamType,
    pub conducted_by: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Exam {
    /// Returns true if the exam has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input data for creating an exam.
#[derive(Debug, Clone)]
pub struct NewExam {
    pub name: String,
    pub exam_type: ExamType,
    pub conducted_by: Option<String>,
    pub is_active: bool,
}

/// Partial update for an exam. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ExamPatch {
    pub name: Option<String>,
    pub exam_type: Option<ExamType>,
    pub conducted_by: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_is_deleted() {
        let mut exam = Exam {
            id: 1,
            name: "CBSE".to_string(),
            exam_type: ExamType::Board,
            conducted_by: None,
            is_active: true,
            created_at: Utc::now(),
            deleted_at: None,
        };
        assert!(!exam.is_deleted());

        exam.deleted_at = Some(Utc::now());
        assert!(exam.is_deleted());
    }

    #[test]
    fn test_exam_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExamType::Board).unwrap(),
            "\"board\""
        );
        assert_eq!(
            serde_json::from_str::<ExamType>("\"competitive\"").unwrap(),
            ExamType::Competitive
        );
    }
}
