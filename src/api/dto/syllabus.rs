//! DTOs for the syllabus tree, localized per request language.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{
    Chapter, ChapterPatch, Difficulty, NewChapter, NewSubject, NewTopic, Subject, SubjectPatch,
    Syllabus, Topic, TopicPatch,
};
use crate::domain::lang::{Lang, LocalizedText};

/// Query parameters for `GET /api/syllabus` and `GET /api/syllabus/sidebar`.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub exam_id: i64,

    #[serde_as(as = "DisplayFromStr")]
    pub course_id: i64,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub year: Option<i32>,
}

/// Query parameters for `GET /api/syllabus/subjects`.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectsQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub syllabus_id: i64,
}

/// Query parameters for `GET /api/syllabus/chapters`.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaptersQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub subject_id: i64,
}

/// Query parameters for `GET /api/syllabus/topics`.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicsQuery {
    #[serde_as(as = "DisplayFromStr")]
    pub chapter_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusDto {
    pub id: i64,
    pub exam_id: i64,
    pub course_id: i64,
    pub academic_year: i32,
    pub is_active: bool,
}

impl From<Syllabus> for SyllabusDto {
    fn from(s: Syllabus) -> Self {
        Self {
            id: s.id,
            exam_id: s.exam_id,
            course_id: s.course_id,
            academic_year: s.academic_year,
            is_active: s.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: i64,
    pub syllabus_id: i64,
    pub name: String,
    pub order: i32,
    pub is_active: bool,
}

impl SubjectDto {
    pub fn from_entity(subject: Subject, lang: Lang) -> Self {
        Self {
            id: subject.id,
            syllabus_id: subject.syllabus_id,
            name: subject.name.resolve(lang).to_string(),
            order: subject.order,
            is_active: subject.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub id: i64,
    pub subject_id: i64,
    pub chapter_number: i32,
    pub name: String,
    pub order: i32,
}

impl ChapterDto {
    pub fn from_entity(chapter: Chapter, lang: Lang) -> Self {
        Self {
            id: chapter.id,
            subject_id: chapter.subject_id,
            chapter_number: chapter.chapter_number,
            name: chapter.name.resolve(lang).to_string(),
            order: chapter.order,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto {
    pub id: i64,
    pub chapter_id: i64,
    pub name: String,
    pub difficulty: Difficulty,
    pub is_core_topic: bool,
}

impl TopicDto {
    pub fn from_entity(topic: Topic, lang: Lang) -> Self {
        Self {
            id: topic.id,
            chapter_id: topic.chapter_id,
            name: topic.name.resolve(lang).to_string(),
            difficulty: topic.difficulty,
            is_core_topic: topic.is_core_topic,
        }
    }
}

/// One subject with its nested chapters and topics; the sidebar tree is a
/// `Vec<SidebarSubject>`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSubject {
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub chapters: Vec<SidebarChapter>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarChapter {
    pub id: i64,
    pub chapter_number: i32,
    pub name: String,
    pub topics: Vec<SidebarTopic>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarTopic {
    pub id: i64,
    pub name: String,
    pub difficulty: Difficulty,
    pub is_core_topic: bool,
}

/// Groups the flat subject/chapter/topic collections into the nested sidebar
/// shape, resolving names for the requested language.
///
/// Input collections are assumed pre-ordered by the store; grouping preserves
/// that order.
pub fn build_sidebar(
    subjects: Vec<Subject>,
    chapters: Vec<Chapter>,
    topics: Vec<Topic>,
    lang: Lang,
) -> Vec<SidebarSubject> {
    use std::collections::HashMap;

    let mut topics_by_chapter: HashMap<i64, Vec<SidebarTopic>> = HashMap::new();
    for topic in topics {
        topics_by_chapter
            .entry(topic.chapter_id)
            .or_default()
            .push(SidebarTopic {
                id: topic.id,
                name: topic.name.resolve(lang).to_string(),
                difficulty: topic.difficulty,
                is_core_topic: topic.is_core_topic,
            });
    }

    let mut chapters_by_subject: HashMap<i64, Vec<SidebarChapter>> = HashMap::new();
    for chapter in chapters {
        chapters_by_subject
            .entry(chapter.subject_id)
            .or_default()
            .push(SidebarChapter {
                id: chapter.id,
                chapter_number: chapter.chapter_number,
                name: chapter.name.resolve(lang).to_string(),
                topics: topics_by_chapter.remove(&chapter.id).unwrap_or_default(),
            });
    }

    subjects
        .into_iter()
        .map(|subject| SidebarSubject {
            id: subject.id,
            name: subject.name.resolve(lang).to_string(),
            order: subject.order,
            chapters: chapters_by_subject.remove(&subject.id).unwrap_or_default(),
        })
        .collect()
}

/// Multilingual name input: English required, Hindi optional.
#[derive(Debug, Deserialize, Validate)]
pub struct LocalizedNameInput {
    #[validate(length(min = 1, max = 160))]
    pub en: String,

    #[validate(length(min = 1, max = 160))]
    pub hi: Option<String>,
}

impl From<LocalizedNameInput> for LocalizedText {
    fn from(input: LocalizedNameInput) -> Self {
        LocalizedText {
            en: input.en,
            hi: input.hi,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    pub syllabus_id: i64,

    #[validate(nested)]
    pub name: LocalizedNameInput,

    #[validate(range(min = 0))]
    pub order: i32,

    #[serde(default = "super::exam::default_true")]
    pub is_active: bool,
}

impl From<CreateSubjectRequest> for NewSubject {
    fn from(req: CreateSubjectRequest) -> Self {
        NewSubject {
            syllabus_id: req.syllabus_id,
            name: req.name.into(),
            order: req.order,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubjectRequest {
    #[validate(nested)]
    pub name: Option<LocalizedNameInput>,

    #[validate(range(min = 0))]
    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

impl From<UpdateSubjectRequest> for SubjectPatch {
    fn from(req: UpdateSubjectRequest) -> Self {
        SubjectPatch {
            name: req.name.map(Into::into),
            order: req.order,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapterRequest {
    pub subject_id: i64,

    #[validate(range(min = 1))]
    pub chapter_number: i32,

    #[validate(nested)]
    pub name: LocalizedNameInput,

    #[validate(range(min = 0))]
    pub order: i32,
}

impl From<CreateChapterRequest> for NewChapter {
    fn from(req: CreateChapterRequest) -> Self {
        NewChapter {
            subject_id: req.subject_id,
            chapter_number: req.chapter_number,
            name: req.name.into(),
            order: req.order,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChapterRequest {
    #[validate(range(min = 1))]
    pub chapter_number: Option<i32>,

    #[validate(nested)]
    pub name: Option<LocalizedNameInput>,

    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

impl From<UpdateChapterRequest> for ChapterPatch {
    fn from(req: UpdateChapterRequest) -> Self {
        ChapterPatch {
            chapter_number: req.chapter_number,
            name: req.name.map(Into::into),
            order: req.order,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub chapter_id: i64,

    #[validate(nested)]
    pub name: LocalizedNameInput,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub is_core_topic: bool,
}

impl From<CreateTopicRequest> for NewTopic {
    fn from(req: CreateTopicRequest) -> Self {
        NewTopic {
            chapter_id: req.chapter_id,
            name: req.name.into(),
            difficulty: req.difficulty,
            is_core_topic: req.is_core_topic,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    #[validate(nested)]
    pub name: Option<LocalizedNameInput>,

    pub difficulty: Option<Difficulty>,

    pub is_core_topic: Option<bool>,
}

impl From<UpdateTopicRequest> for TopicPatch {
    fn from(req: UpdateTopicRequest) -> Self {
        TopicPatch {
            name: req.name.map(Into::into),
            difficulty: req.difficulty,
            is_core_topic: req.is_core_topic,
        }
    }
}
