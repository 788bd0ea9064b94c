//! Contact-us submission entity.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}
