//! Handlers for the question bank.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::question::{
    CreateQuestionRequest, QuestionDto, QuestionQuery, UpdateQuestionRequest,
};
use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/question?topicId=...[&limit=...]`
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<QuestionQuery>,
) -> Result<Envelope<Vec<QuestionDto>>, AppError> {
    let questions = state
        .question_service
        .list_for_topic(query.topic_id, query.limit)
        .await?;
    Ok(Envelope::ok(
        questions.into_iter().map(QuestionDto::from).collect(),
    ))
}

/// `POST /api/admin/questions`
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<Envelope<QuestionDto>, AppError> {
    payload.validate()?;

    let question = state.question_service.create(payload.into()).await?;
    Ok(Envelope::created(question.into()))
}

/// `PATCH /api/admin/questions/{id}`
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<Envelope<QuestionDto>, AppError> {
    payload.validate()?;

    let question = state.question_service.update(id, payload.into()).await?;
    Ok(Envelope::ok(question.into()))
}
