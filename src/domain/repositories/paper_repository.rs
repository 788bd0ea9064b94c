//! Repository trait for previous/solved papers and download tracking.

use async_trait::async_trait;

use crate::domain::entities::{Paper, PaperKind};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaperRepository: Send + Sync {
    /// Lists active papers of one kind for an exam, newest year first,
    /// optionally pinned to a year.
    async fn list(
        &self,
        kind: PaperKind,
        exam_id: i64,
        year: Option<i32>,
    ) -> Result<Vec<Paper>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Paper>, AppError>;

    /// Records one download of a paper by a user.
    async fn record_download(&self, paper_id: i64, user_id: &str) -> Result<(), AppError>;
}
