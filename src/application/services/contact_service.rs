//! Contact-us intake service.

use std::sync::Arc;

use crate::config::MailConfig;
use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Stores contact submissions and hands them to the notification pipeline.
///
/// Delivery itself happens out of process; this service persists the message
/// and logs the notification target so a worker can pick it up.
pub struct ContactService {
    contact_repository: Arc<dyn ContactRepository>,
    mail: MailConfig,
}

impl ContactService {
    pub fn new(contact_repository: Arc<dyn ContactRepository>, mail: MailConfig) -> Self {
        Self {
            contact_repository,
            mail,
        }
    }

    pub async fn submit(&self, new_message: NewContactMessage) -> Result<ContactMessage, AppError> {
        let message = self.contact_repository.create(new_message).await?;

        tracing::info!(
            id = message.id,
            notify = %self.mail.from,
            "contact submission stored"
        );

        Ok(message)
    }
}
