//! Repository trait for per-user course access records.

use async_trait::async_trait;

use crate::domain::entities::{CourseAccess, CourseAccessRecord};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessRepository: Send + Sync {
    /// All access records for a user, joined with course name/slug, most
    /// recent purchase first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CourseAccessRecord>, AppError>;

    /// The user's most recently purchased access that is still usable
    /// (lifetime or unexpired). Drives the dashboard's course selection.
    async fn find_current_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CourseAccess>, AppError>;
}
