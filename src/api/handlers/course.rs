//! Handlers for the course catalog, public and admin.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::course::{
    CourseDto, CourseListQuery, CreateCourseRequest, SlugRequest, UpdateCourseRequest,
};
use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/course?examId=...`
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<Envelope<Vec<CourseDto>>, AppError> {
    let courses = state.course_service.list_for_exam(query.exam_id).await?;
    Ok(Envelope::ok(
        courses.into_iter().map(CourseDto::from).collect(),
    ))
}

/// `POST /api/course/byslug`
///
/// Slug lookup is a POST so slugs never end up in access logs or caches.
pub async fn by_slug_handler(
    State(state): State<AppState>,
    Json(payload): Json<SlugRequest>,
) -> Result<Envelope<CourseDto>, AppError> {
    payload.validate()?;

    let course = state.course_service.get_by_slug(&payload.slug).await?;
    Ok(Envelope::ok(course.into()))
}

/// `POST /api/admin/courses`
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<Envelope<CourseDto>, AppError> {
    payload.validate()?;

    let course = state.course_service.create(payload.into()).await?;
    Ok(Envelope::created(course.into()))
}

/// `PATCH /api/admin/courses/{id}`
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<Envelope<CourseDto>, AppError> {
    payload.validate()?;

    let course = state.course_service.update(id, payload.into()).await?;
    Ok(Envelope::ok(course.into()))
}

/// `DELETE /api/admin/courses/{id}`
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<Value>, AppError> {
    state.course_service.delete(id).await?;
    Ok(Envelope::ok(json!({ "id": id, "deleted": true })))
}
