//! Caller identity extractor.
//!
//! Sessions are resolved by the edge; the API trusts `x-user-id` and
//! `x-user-role` headers. A missing user id rejects with 401; a missing or
//! unparseable role falls back to the least-privileged one.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde_json::json;

use crate::api::policy::Role;
use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Authentication required",
                    json!({ "header": USER_ID_HEADER }),
                )
            })?
            .to_string();

        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(Role::Student);

        Ok(Identity { user_id, role })
    }
}
