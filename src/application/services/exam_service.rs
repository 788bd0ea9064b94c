//! Exam catalog and administration service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Exam, ExamPatch, NewExam};
use crate::domain::repositories::ExamRepository;
use crate::error::AppError;

/// Service for the exam catalog.
///
/// Public reads return active exams only; the admin listing includes inactive
/// ones and supports pagination with an optional name search.
pub struct ExamService {
    exam_repository: Arc<dyn ExamRepository>,
}

impl ExamService {
    pub fn new(exam_repository: Arc<dyn ExamRepository>) -> Self {
        Self { exam_repository }
    }

    /// Active exams for the public catalog.
    pub async fn list_public(&self) -> Result<Vec<Exam>, AppError> {
        self.exam_repository.list_public().await
    }

    /// Paginated admin listing, optionally filtered by a name fragment.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Exam>, AppError> {
        self.exam_repository.list(offset, limit, search).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live exam matches `id`.
    pub async fn get(&self, id: i64) -> Result<Exam, AppError> {
        self.exam_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Exam not found", json!({ "id": id })))
    }

    pub async fn create(&self, new_exam: NewExam) -> Result<Exam, AppError> {
        self.exam_repository.create(new_exam).await
    }

    pub async fn update(&self, id: i64, patch: ExamPatch) -> Result<Exam, AppError> {
        self.exam_repository.update(id, patch).await
    }

    /// Soft-deletes an exam.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the exam does not exist or was
    /// already deleted.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.exam_repository.soft_delete(id).await? {
            return Err(AppError::not_found("Exam not found", json!({ "id": id })));
        }
        Ok(())
    }
}
