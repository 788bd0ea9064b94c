//! Course-library service: what a user owns and whether it is still usable.

use std::sync::Arc;

use crate::domain::entities::{CourseAccess, CourseAccessRecord};
use crate::domain::repositories::AccessRepository;
use crate::error::AppError;

pub struct AccessService {
    access_repository: Arc<dyn AccessRepository>,
}

impl AccessService {
    pub fn new(access_repository: Arc<dyn AccessRepository>) -> Self {
        Self { access_repository }
    }

    /// Everything the user has ever purchased or claimed, expired records
    /// included so the client can offer renewal.
    pub async fn library(&self, user_id: &str) -> Result<Vec<CourseAccessRecord>, AppError> {
        self.access_repository.list_for_user(user_id).await
    }

    /// The most recently purchased access that is still usable, if any.
    pub async fn current(&self, user_id: &str) -> Result<Option<CourseAccess>, AppError> {
        self.access_repository.find_current_for_user(user_id).await
    }
}
