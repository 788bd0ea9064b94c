//! Course catalog and administration service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

pub struct CourseService {
    course_repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Active courses for one exam.
    pub async fn list_for_exam(&self, exam_id: i64) -> Result<Vec<Course>, AppError> {
        self.course_repository.list_for_exam(exam_id).await
    }

    /// Resolves a course by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live course carries the slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Course, AppError> {
        self.course_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "slug": slug })))
    }

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    pub async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        self.course_repository.create(new_course).await
    }

    pub async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        self.course_repository.update(id, patch).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.course_repository.soft_delete(id).await? {
            return Err(AppError::not_found("Course not found", json!({ "id": id })));
        }
        Ok(())
    }
}
