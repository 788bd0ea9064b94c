//! Dashboard composition: the caller's current course and its syllabus tree.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::syllabus_service::SyllabusContent;
use crate::domain::entities::{Course, CourseAccess};
use crate::domain::repositories::{AccessRepository, CourseRepository, SyllabusRepository};
use crate::error::AppError;

/// Everything the dashboard view needs for one user.
#[derive(Debug)]
pub struct DashboardData {
    pub course: Course,
    pub access: CourseAccess,
    pub content: SyllabusContent,
}

pub struct DashboardService {
    access_repository: Arc<dyn AccessRepository>,
    course_repository: Arc<dyn CourseRepository>,
    syllabus_repository: Arc<dyn SyllabusRepository>,
}

impl DashboardService {
    pub fn new(
        access_repository: Arc<dyn AccessRepository>,
        course_repository: Arc<dyn CourseRepository>,
        syllabus_repository: Arc<dyn SyllabusRepository>,
    ) -> Self {
        Self {
            access_repository,
            course_repository,
            syllabus_repository,
        }
    }

    /// Resolves the user's current course and loads its full syllabus tree.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the user has no usable access,
    /// when the course behind it was removed, or when the course has no
    /// active syllabus.
    pub async fn syllabus_for_user(&self, user_id: &str) -> Result<DashboardData, AppError> {
        let access = self
            .access_repository
            .find_current_for_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "No active course access",
                    json!({ "userId": user_id }),
                )
            })?;

        let course = self
            .course_repository
            .find_by_id(access.course_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Course no longer available",
                    json!({ "courseId": access.course_id }),
                )
            })?;

        let syllabus = self
            .syllabus_repository
            .find_active(course.exam_id, course.id, None)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "No active syllabus for this course",
                    json!({ "courseId": course.id }),
                )
            })?;

        let subjects = self.syllabus_repository.list_subjects(syllabus.id).await?;
        let chapters = self
            .syllabus_repository
            .list_chapters_for_syllabus(syllabus.id)
            .await?;
        let topics = self
            .syllabus_repository
            .list_topics_for_syllabus(syllabus.id)
            .await?;

        Ok(DashboardData {
            course,
            access,
            content: SyllabusContent {
                syllabus,
                subjects,
                chapters,
                topics,
            },
        })
    }
}
