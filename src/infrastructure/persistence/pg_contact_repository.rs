//! PostgreSQL implementation of the contact-submission repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    phone: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, new_message: NewContactMessage) -> Result<ContactMessage, AppError> {
        let row: ContactRow = sqlx::query_as(
            "INSERT INTO contact_messages (name, phone, email, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, phone, email, message, created_at",
        )
        .bind(new_message.name)
        .bind(new_message.phone)
        .bind(new_message.email)
        .bind(new_message.message)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ContactMessage {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        })
    }
}
