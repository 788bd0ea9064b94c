//! Handler for the student dashboard.

use axum::extract::State;
use chrono::Utc;

use crate::api::dto::dashboard::DashboardDto;
use crate::api::envelope::Envelope;
use crate::api::extract::Identity;
use crate::domain::lang::Lang;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/dashboard/syllabus`
///
/// The caller's current course with its full syllabus tree.
pub async fn syllabus_handler(
    State(state): State<AppState>,
    identity: Identity,
    lang: Lang,
) -> Result<Envelope<DashboardDto>, AppError> {
    let data = state
        .dashboard_service
        .syllabus_for_user(&identity.user_id)
        .await?;
    Ok(Envelope::ok(DashboardDto::from_data(data, lang, Utc::now())))
}
