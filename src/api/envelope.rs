//! Uniform response envelope shared by every API route.
//!
//! The HTTP status of the response is always taken from the envelope's own
//! `statusCode`, so the two can never drift apart.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// The `{success, data, error, statusCode}` wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope with HTTP 200.
    pub fn ok(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    /// Success envelope with HTTP 201.
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    /// Success envelope with an explicit status.
    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status_code: status.as_u16(),
        }
    }
}

impl Envelope<Value> {
    /// Failure envelope: `success:false`, `data:null`.
    pub fn failure(error: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status_code: status.as_u16(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
