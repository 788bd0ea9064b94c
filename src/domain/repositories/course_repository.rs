//! Repository trait for course data access.

use async_trait::async_trait;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::error::AppError;

/// Repository interface for courses. Reads exclude soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists active courses belonging to an exam.
    async fn list_for_exam(&self, exam_id: i64) -> Result<Vec<Course>, AppError>;

    /// Finds a course by its URL slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Partially updates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live course matches `id`.
    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError>;

    /// Soft-deletes a course. Returns `Ok(false)` if not found or already
    /// deleted.
    async fn soft_delete(&self, id: i64) -> Result<bool, AppError>;
}
