//! Repository trait for the syllabus tree (syllabus, subjects, chapters, topics).

use async_trait::async_trait;

use crate::domain::entities::{
    Chapter, ChapterPatch, NewChapter, NewSubject, NewTopic, Subject, SubjectPatch, Syllabus,
    Topic, TopicPatch,
};
use crate::error::AppError;

/// Repository interface for the syllabus aggregate.
///
/// Listing methods are parent-scoped and ordered by the entity's `order`
/// column; all reads exclude soft-deleted rows. The `*_for_syllabus` variants
/// return the flat collections the sidebar tree is assembled from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyllabusRepository: Send + Sync {
    /// Finds the active syllabus for an exam + course, optionally pinned to
    /// an academic year. Without a year, the most recent one wins.
    async fn find_active(
        &self,
        exam_id: i64,
        course_id: i64,
        academic_year: Option<i32>,
    ) -> Result<Option<Syllabus>, AppError>;

    async fn list_subjects(&self, syllabus_id: i64) -> Result<Vec<Subject>, AppError>;

    async fn list_chapters(&self, subject_id: i64) -> Result<Vec<Chapter>, AppError>;

    async fn list_topics(&self, chapter_id: i64) -> Result<Vec<Topic>, AppError>;

    /// All chapters under a syllabus, across subjects.
    async fn list_chapters_for_syllabus(&self, syllabus_id: i64)
    -> Result<Vec<Chapter>, AppError>;

    /// All topics under a syllabus, across chapters.
    async fn list_topics_for_syllabus(&self, syllabus_id: i64) -> Result<Vec<Topic>, AppError>;

    async fn create_subject(&self, new_subject: NewSubject) -> Result<Subject, AppError>;

    async fn update_subject(&self, id: i64, patch: SubjectPatch) -> Result<Subject, AppError>;

    async fn create_chapter(&self, new_chapter: NewChapter) -> Result<Chapter, AppError>;

    async fn update_chapter(&self, id: i64, patch: ChapterPatch) -> Result<Chapter, AppError>;

    async fn create_topic(&self, new_topic: NewTopic) -> Result<Topic, AppError>;

    async fn update_topic(&self, id: i64, patch: TopicPatch) -> Result<Topic, AppError>;
}
