//! Handlers for syllabus browsing and content management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::syllabus::{
    ChapterDto, ChaptersQuery, CreateChapterRequest, CreateSubjectRequest, CreateTopicRequest,
    SidebarSubject, SubjectDto, SubjectsQuery, SyllabusDto, SyllabusQuery, TopicDto, TopicsQuery,
    UpdateChapterRequest, UpdateSubjectRequest, UpdateTopicRequest, build_sidebar,
};
use crate::api::envelope::Envelope;
use crate::domain::lang::Lang;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/syllabus?examId=...&courseId=...[&year=...]`
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<SyllabusQuery>,
) -> Result<Envelope<SyllabusDto>, AppError> {
    let syllabus = state
        .syllabus_service
        .get_active(query.exam_id, query.course_id, query.year)
        .await?;
    Ok(Envelope::ok(syllabus.into()))
}

/// `GET /api/syllabus/subjects?syllabusId=...`
pub async fn subjects_handler(
    State(state): State<AppState>,
    lang: Lang,
    Query(query): Query<SubjectsQuery>,
) -> Result<Envelope<Vec<SubjectDto>>, AppError> {
    let subjects = state
        .syllabus_service
        .list_subjects(query.syllabus_id)
        .await?;
    Ok(Envelope::ok(
        subjects
            .into_iter()
            .map(|s| SubjectDto::from_entity(s, lang))
            .collect(),
    ))
}

/// `GET /api/syllabus/chapters?subjectId=...`
pub async fn chapters_handler(
    State(state): State<AppState>,
    lang: Lang,
    Query(query): Query<ChaptersQuery>,
) -> Result<Envelope<Vec<ChapterDto>>, AppError> {
    let chapters = state
        .syllabus_service
        .list_chapters(query.subject_id)
        .await?;
    Ok(Envelope::ok(
        chapters
            .into_iter()
            .map(|c| ChapterDto::from_entity(c, lang))
            .collect(),
    ))
}

/// `GET /api/syllabus/topics?chapterId=...`
pub async fn topics_handler(
    State(state): State<AppState>,
    lang: Lang,
    Query(query): Query<TopicsQuery>,
) -> Result<Envelope<Vec<TopicDto>>, AppError> {
    let topics = state.syllabus_service.list_topics(query.chapter_id).await?;
    Ok(Envelope::ok(
        topics
            .into_iter()
            .map(|t| TopicDto::from_entity(t, lang))
            .collect(),
    ))
}

/// `GET /api/syllabus/sidebar?examId=...&courseId=...[&year=...]`
///
/// The whole tree in one response for navigation rendering.
pub async fn sidebar_handler(
    State(state): State<AppState>,
    lang: Lang,
    Query(query): Query<SyllabusQuery>,
) -> Result<Envelope<Vec<SidebarSubject>>, AppError> {
    let content = state
        .syllabus_service
        .get_content(query.exam_id, query.course_id, query.year)
        .await?;
    Ok(Envelope::ok(build_sidebar(
        content.subjects,
        content.chapters,
        content.topics,
        lang,
    )))
}

/// `POST /api/admin/subjects`
pub async fn create_subject_handler(
    State(state): State<AppState>,
    lang: Lang,
    Json(payload): Json<CreateSubjectRequest>,
) -> Result<Envelope<SubjectDto>, AppError> {
    payload.validate()?;

    let subject = state.syllabus_service.create_subject(payload.into()).await?;
    Ok(Envelope::created(SubjectDto::from_entity(subject, lang)))
}

/// `PATCH /api/admin/subjects/{id}`
pub async fn update_subject_handler(
    State(state): State<AppState>,
    lang: Lang,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSubjectRequest>,
) -> Result<Envelope<SubjectDto>, AppError> {
    payload.validate()?;

    let subject = state
        .syllabus_service
        .update_subject(id, payload.into())
        .await?;
    Ok(Envelope::ok(SubjectDto::from_entity(subject, lang)))
}

/// `POST /api/admin/chapters`
pub async fn create_chapter_handler(
    State(state): State<AppState>,
    lang: Lang,
    Json(payload): Json<CreateChapterRequest>,
) -> Result<Envelope<ChapterDto>, AppError> {
    payload.validate()?;

    let chapter = state.syllabus_service.create_chapter(payload.into()).await?;
    Ok(Envelope::created(ChapterDto::from_entity(chapter, lang)))
}

/// `PATCH /api/admin/chapters/{id}`
pub async fn update_chapter_handler(
    State(state): State<AppState>,
    lang: Lang,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateChapterRequest>,
) -> Result<Envelope<ChapterDto>, AppError> {
    payload.validate()?;

    let chapter = state
        .syllabus_service
        .update_chapter(id, payload.into())
        .await?;
    Ok(Envelope::ok(ChapterDto::from_entity(chapter, lang)))
}

/// `POST /api/admin/topics`
pub async fn create_topic_handler(
    State(state): State<AppState>,
    lang: Lang,
    Json(payload): Json<CreateTopicRequest>,
) -> Result<Envelope<TopicDto>, AppError> {
    payload.validate()?;

    let topic = state.syllabus_service.create_topic(payload.into()).await?;
    Ok(Envelope::created(TopicDto::from_entity(topic, lang)))
}

/// `PATCH /api/admin/topics/{id}`
pub async fn update_topic_handler(
    State(state): State<AppState>,
    lang: Lang,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTopicRequest>,
) -> Result<Envelope<TopicDto>, AppError> {
    payload.validate()?;

    let topic = state
        .syllabus_service
        .update_topic(id, payload.into())
        .await?;
    Ok(Envelope::ok(TopicDto::from_entity(topic, lang)))
}
