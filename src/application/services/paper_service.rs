//! Paper archive service: listings plus tracked downloads.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use crate::domain::entities::{Paper, PaperKind};
use crate::domain::repositories::PaperRepository;
use crate::error::AppError;

pub struct PaperService {
    paper_repository: Arc<dyn PaperRepository>,
}

impl PaperService {
    pub fn new(paper_repository: Arc<dyn PaperRepository>) -> Self {
        Self { paper_repository }
    }

    pub async fn list(
        &self,
        kind: PaperKind,
        exam_id: i64,
        year: Option<i32>,
    ) -> Result<Vec<Paper>, AppError> {
        self.paper_repository.list(kind, exam_id, year).await
    }

    /// Resolves a paper for download and records the download against the
    /// user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown paper and
    /// [`AppError::Domain`] with `409` for one that has been deactivated.
    pub async fn download(&self, paper_id: i64, user_id: &str) -> Result<Paper, AppError> {
        let paper = self
            .paper_repository
            .find_by_id(paper_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Paper not found", json!({ "id": paper_id }))
            })?;

        if !paper.is_active {
            return Err(AppError::domain(
                "Paper is no longer available",
                StatusCode::CONFLICT,
                json!({ "id": paper_id }),
            ));
        }

        self.paper_repository.record_download(paper_id, user_id).await?;

        Ok(paper)
    }
}
