//! Handler for contact-us submissions.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::contact::{ContactReceiptDto, ContactRequest};
use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/contact`
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Envelope<ContactReceiptDto>, AppError> {
    payload.validate()?;

    let message = state.contact_service.submit(payload.into()).await?;
    Ok(Envelope::created(message.into()))
}
