//! Repository trait for exam data access.

use async_trait::async_trait;

use crate::domain::entities::{Exam, ExamPatch, NewExam};
use crate::error::AppError;

/// Repository interface for exams.
///
/// All read methods exclude soft-deleted rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgExamRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Lists active exams for the public catalog, name-ordered.
    async fn list_public(&self) -> Result<Vec<Exam>, AppError>;

    /// Lists exams for the admin view (inactive included), with pagination
    /// and an optional name search.
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        search: Option<String>,
    ) -> Result<Vec<Exam>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Exam>, AppError>;

    async fn create(&self, new_exam: NewExam) -> Result<Exam, AppError>;

    /// Partially updates an exam.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live exam matches `id`.
    async fn update(&self, id: i64, patch: ExamPatch) -> Result<Exam, AppError>;

    /// Soft-deletes an exam. Returns `Ok(false)` if it was not found or
    /// already deleted.
    async fn soft_delete(&self, id: i64) -> Result<bool, AppError>;
}
