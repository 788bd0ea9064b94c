//! Liveness/readiness endpoint.

use axum::extract::State;
use serde_json::{Value, json};

use crate::api::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /health`
///
/// Pings the database so load balancers see a failing dependency as a
/// failing instance.
pub async fn health_handler(State(state): State<AppState>) -> Result<Envelope<Value>, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await?;

    Ok(Envelope::ok(json!({ "status": "ok" })))
}
