//! Handlers for quizzes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::quiz::{CreateQuizRequest, QuizDto, QuizListQuery, UpdateQuizRequest};
use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/quiz[?type=...&linkedEntityId=...]`
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<QuizListQuery>,
) -> Result<Envelope<Vec<QuizDto>>, AppError> {
    let quizzes = state
        .quiz_service
        .list(query.quiz_type, query.linked_entity_id)
        .await?;
    Ok(Envelope::ok(quizzes.into_iter().map(QuizDto::from).collect()))
}

/// `GET /api/quiz/{id}`
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Envelope<QuizDto>, AppError> {
    let quiz = state.quiz_service.get(id).await?;
    Ok(Envelope::ok(quiz.into()))
}

/// `POST /api/admin/quizzes`
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<Envelope<QuizDto>, AppError> {
    payload.validate()?;

    let quiz = state.quiz_service.create(payload.into()).await?;
    Ok(Envelope::created(quiz.into()))
}

/// `PATCH /api/admin/quizzes/{id}`
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuizRequest>,
) -> Result<Envelope<QuizDto>, AppError> {
    payload.validate()?;

    let quiz = state.quiz_service.update(id, payload.into()).await?;
    Ok(Envelope::ok(quiz.into()))
}
