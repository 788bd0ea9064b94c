//! Handlers for learning progress.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::progress::{ProgressDto, ProgressQuery, UpsertProgressRequest};
use crate::api::envelope::Envelope;
use crate::api::extract::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/progress`
pub async fn upsert_handler(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<UpsertProgressRequest>,
) -> Result<Envelope<ProgressDto>, AppError> {
    payload.validate()?;

    let progress = state
        .progress_service
        .record(payload.into_new(identity.user_id))
        .await?;
    Ok(Envelope::ok(progress.into()))
}

/// `GET /api/progress[?subjectId=...]`
pub async fn list_handler(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ProgressQuery>,
) -> Result<Envelope<Vec<ProgressDto>>, AppError> {
    let rows = state
        .progress_service
        .list(&identity.user_id, query.subject_id)
        .await?;
    Ok(Envelope::ok(rows.into_iter().map(ProgressDto::from).collect()))
}
