//! Syllabus tree entities: syllabus → subject → chapter → topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lang::LocalizedText;

/// Difficulty grading shared by topics and questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A syllabus for one exam + course + academic year.
#[derive(Debug, Clone)]
pub struct Syllabus {
    pub id: i64,
    pub exam_id: i64,
    pub course_id: i64,
    pub academic_year: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A subject within a syllabus. `order` defines the stable sort within the
/// parent syllabus.
#[derive(Debug, Clone)]
pub struct Subject {
    pub id: i64,
    pub syllabus_id: i64,
    pub name: LocalizedText,
    pub order: i32,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A chapter within a subject.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: i64,
    pub subject_id: i64,
    pub chapter_number: i32,
    pub name: LocalizedText,
    pub order: i32,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A topic within a chapter.
#[derive(Debug, Clone)]
pub struct Topic {
    pub id: i64,
    pub chapter_id: i64,
    pub name: LocalizedText,
    pub difficulty: Difficulty,
    pub is_core_topic: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewSubject {
    pub syllabus_id: i64,
    pub name: LocalizedText,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SubjectPatch {
    pub name: Option<LocalizedText>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewChapter {
    pub subject_id: i64,
    pub chapter_number: i32,
    pub name: LocalizedText,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ChapterPatch {
    pub chapter_number: Option<i32>,
    pub name: Option<LocalizedText>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub chapter_id: i64,
    pub name: LocalizedText,
    pub difficulty: Difficulty,
    pub is_core_topic: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TopicPatch {
    pub name: Option<LocalizedText>,
    pub difficulty: Option<Difficulty>,
    pub is_core_topic: Option<bool>,
}
