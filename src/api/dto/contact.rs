//! DTO for the contact-us form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ContactMessage, NewContactMessage};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 120))]
    pub name: String,

    #[validate(length(min = 7, max = 20))]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 10, max = 4000))]
    pub message: String,
}

impl From<ContactRequest> for NewContactMessage {
    fn from(req: ContactRequest) -> Self {
        NewContactMessage {
            name: req.name,
            phone: req.phone,
            email: req.email,
            message: req.message,
        }
    }
}

/// Acknowledgement body returned after a submission is stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceiptDto {
    pub id: i64,
    pub name: String,
}

impl From<ContactMessage> for ContactReceiptDto {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}
