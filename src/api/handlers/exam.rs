//! Handlers for the exam catalog, public and admin.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::exam::{CreateExamRequest, ExamDto, UpdateExamRequest};
use crate::api::dto::params::ListParams;
use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/exam/public`
///
/// Active exams only; an empty catalog is a successful empty list.
pub async fn list_public_handler(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<ExamDto>>, AppError> {
    let exams = state.exam_service.list_public().await?;
    Ok(Envelope::ok(exams.into_iter().map(ExamDto::from).collect()))
}

/// `GET /api/admin/exams`
pub async fn list_admin_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Envelope<Vec<ExamDto>>, AppError> {
    let (offset, limit) = params.offset_limit()?;
    let exams = state
        .exam_service
        .list(offset, limit, params.search())
        .await?;
    Ok(Envelope::ok(exams.into_iter().map(ExamDto::from).collect()))
}

/// `POST /api/admin/exams`
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateExamRequest>,
) -> Result<Envelope<ExamDto>, AppError> {
    payload.validate()?;

    let exam = state.exam_service.create(payload.into()).await?;
    Ok(Envelope::created(exam.into()))
}

/// `PATCH /api/admin/exams/{id}`
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExamRequest>,
) -> Result<Envelope<ExamDto>, AppError> {
    payload.validate()?;

    let exam = state.exam_service.update(id, payload.into()).await?;
    Ok(Envelope::ok(exam.into()))
}

/// `DELETE /api/admin/exams/{id}`
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<Value>, AppError> {
    state.exam_service.delete(id).await?;
    Ok(Envelope::ok(json!({ "id": id, "deleted": true })))
}
