//! Repository trait for contact-us submissions.

use async_trait::async_trait;

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, new_message: NewContactMessage) -> Result<ContactMessage, AppError>;
}
