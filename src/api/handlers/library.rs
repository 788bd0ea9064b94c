//! Handler for the user's course library.

use axum::extract::State;
use chrono::Utc;

use crate::api::dto::access::CourseAccessDto;
use crate::api::envelope::Envelope;
use crate::api::extract::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/user/courses`
///
/// Every course the caller owns, expired ones included, with the access
/// status computed at response time.
pub async fn list_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Envelope<Vec<CourseAccessDto>>, AppError> {
    let now = Utc::now();
    let records = state.access_service.library(&identity.user_id).await?;
    Ok(Envelope::ok(
        records
            .into_iter()
            .map(|r| CourseAccessDto::from_record(r, now))
            .collect(),
    ))
}
