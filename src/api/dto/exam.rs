//! DTOs for exam endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Exam, ExamPatch, ExamType, NewExam};

/// Wire representation of an exam. `category` carries the exam type, matching
/// the public catalog contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDto {
    pub id: i64,
    pub name: String,
    pub category: ExamType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conducted_by: Option<String>,
    pub is_active: bool,
}

impl From<Exam> for ExamDto {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id,
            name: exam.name,
            category: exam.exam_type,
            conducted_by: exam.conducted_by,
            is_active: exam.is_active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,

    pub exam_type: ExamType,

    #[validate(length(min = 2, max = 120))]
    pub conducted_by: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateExamRequest> for NewExam {
    fn from(req: CreateExamRequest) -> Self {
        NewExam {
            name: req.name,
            exam_type: req.exam_type,
            conducted_by: req.conducted_by,
            is_active: req.is_active,
        }
    }
}

/// Partial update payload; every field optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExamRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: Option<String>,

    pub exam_type: Option<ExamType>,

    #[validate(length(min = 2, max = 120))]
    pub conducted_by: Option<String>,

    pub is_active: Option<bool>,
}

impl From<UpdateExamRequest> for ExamPatch {
    fn from(req: UpdateExamRequest) -> Self {
        ExamPatch {
            name: req.name,
            exam_type: req.exam_type,
            conducted_by: req.conducted_by,
            is_active: req.is_active,
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}
