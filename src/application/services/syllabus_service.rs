//! Syllabus browsing and content management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{
    Chapter, ChapterPatch, NewChapter, NewSubject, NewTopic, Subject, SubjectPatch, Syllabus,
    Topic, TopicPatch,
};
use crate::domain::repositories::SyllabusRepository;
use crate::error::AppError;

/// The full syllabus tree as flat, ordered collections.
///
/// Handlers group these into the nested sidebar shape; keeping the service
/// output flat avoids tying the application layer to a wire format.
#[derive(Debug)]
pub struct SyllabusContent {
    pub syllabus: Syllabus,
    pub subjects: Vec<Subject>,
    pub chapters: Vec<Chapter>,
    pub topics: Vec<Topic>,
}

pub struct SyllabusService {
    syllabus_repository: Arc<dyn SyllabusRepository>,
}

impl SyllabusService {
    pub fn new(syllabus_repository: Arc<dyn SyllabusRepository>) -> Self {
        Self {
            syllabus_repository,
        }
    }

    /// The active syllabus for an exam + course, optionally pinned to an
    /// academic year.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active syllabus matches.
    pub async fn get_active(
        &self,
        exam_id: i64,
        course_id: i64,
        academic_year: Option<i32>,
    ) -> Result<Syllabus, AppError> {
        self.syllabus_repository
            .find_active(exam_id, course_id, academic_year)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "No active syllabus for this exam and course",
                    json!({ "examId": exam_id, "courseId": course_id, "year": academic_year }),
                )
            })
    }

    pub async fn list_subjects(&self, syllabus_id: i64) -> Result<Vec<Subject>, AppError> {
        self.syllabus_repository.list_subjects(syllabus_id).await
    }

    pub async fn list_chapters(&self, subject_id: i64) -> Result<Vec<Chapter>, AppError> {
        self.syllabus_repository.list_chapters(subject_id).await
    }

    pub async fn list_topics(&self, chapter_id: i64) -> Result<Vec<Topic>, AppError> {
        self.syllabus_repository.list_topics(chapter_id).await
    }

    /// Loads the whole tree for the sidebar in three scoped queries rather
    /// than one query per subject and chapter.
    pub async fn get_content(
        &self,
        exam_id: i64,
        course_id: i64,
        academic_year: Option<i32>,
    ) -> Result<SyllabusContent, AppError> {
        let syllabus = self.get_active(exam_id, course_id, academic_year).await?;

        let subjects = self.syllabus_repository.list_subjects(syllabus.id).await?;
        let chapters = self
            .syllabus_repository
            .list_chapters_for_syllabus(syllabus.id)
            .await?;
        let topics = self
            .syllabus_repository
            .list_topics_for_syllabus(syllabus.id)
            .await?;

        Ok(SyllabusContent {
            syllabus,
            subjects,
            chapters,
            topics,
        })
    }

    pub async fn create_subject(&self, new_subject: NewSubject) -> Result<Subject, AppError> {
        self.syllabus_repository.create_subject(new_subject).await
    }

    pub async fn update_subject(
        &self,
        id: i64,
        patch: SubjectPatch,
    ) -> Result<Subject, AppError> {
        self.syllabus_repository.update_subject(id, patch).await
    }

    pub async fn create_chapter(&self, new_chapter: NewChapter) -> Result<Chapter, AppError> {
        self.syllabus_repository.create_chapter(new_chapter).await
    }

    pub async fn update_chapter(
        &self,
        id: i64,
        patch: ChapterPatch,
    ) -> Result<Chapter, AppError> {
        self.syllabus_repository.update_chapter(id, patch).await
    }

    pub async fn create_topic(&self, new_topic: NewTopic) -> Result<Topic, AppError> {
        self.syllabus_repository.create_topic(new_topic).await
    }

    pub async fn update_topic(&self, id: i64, patch: TopicPatch) -> Result<Topic, AppError> {
        self.syllabus_repository.update_topic(id, patch).await
    }
}
