//! Handlers for the paper archive.

use axum::{
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::paper::{PaperDownloadDto, PaperDto, PaperQuery};
use crate::api::envelope::Envelope;
use crate::api::extract::Identity;
use crate::domain::entities::PaperKind;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/previous-papers?examId=...[&year=...]`
pub async fn list_previous_handler(
    State(state): State<AppState>,
    Query(query): Query<PaperQuery>,
) -> Result<Envelope<Vec<PaperDto>>, AppError> {
    list(state, PaperKind::Previous, query).await
}

/// `GET /api/solved-papers?examId=...[&year=...]`
pub async fn list_solved_handler(
    State(state): State<AppState>,
    Query(query): Query<PaperQuery>,
) -> Result<Envelope<Vec<PaperDto>>, AppError> {
    list(state, PaperKind::Solved, query).await
}

async fn list(
    state: AppState,
    kind: PaperKind,
    query: PaperQuery,
) -> Result<Envelope<Vec<PaperDto>>, AppError> {
    let exam_id = query.exam_id.ok_or_else(|| {
        AppError::bad_request("examId is required", json!({ "param": "examId" }))
    })?;

    let papers = state.paper_service.list(kind, exam_id, query.year).await?;
    Ok(Envelope::ok(papers.into_iter().map(PaperDto::from).collect()))
}

/// `GET /api/previous-papers/{id}/download`
///
/// Resolves the file URL and records the download for the caller.
pub async fn download_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> Result<Envelope<PaperDownloadDto>, AppError> {
    let paper = state.paper_service.download(id, &identity.user_id).await?;
    Ok(Envelope::ok(paper.into()))
}
