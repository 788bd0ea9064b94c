use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::envelope::Envelope;

/// Application error taxonomy.
///
/// Services let errors propagate with `?`; handlers are the sole translation
/// point from error to HTTP envelope. `Domain` carries an explicit status code
/// for routes (paper tracking) whose failures don't fit the common kinds.
#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
        details: Value,
    },
    Unauthorized {
        message: String,
        details: Value,
    },
    Forbidden {
        message: String,
        details: Value,
    },
    NotFound {
        message: String,
        details: Value,
    },
    Conflict {
        message: String,
        details: Value,
    },
    Domain {
        message: String,
        status: StatusCode,
        details: Value,
    },
    Internal {
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn domain(message: impl Into<String>, status: StatusCode, details: Value) -> Self {
        Self::Domain {
            message: message.into(),
            status,
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status carried by this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Domain { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            // Internal failures are logged with full detail but surfaced
            // with a non-leaking message.
            AppError::Internal { message, details } => {
                tracing::error!(error = %message, ?details, "internal error");
                "Internal server error".to_string()
            }
            AppError::Validation { message, details }
            | AppError::Unauthorized { message, details }
            | AppError::Forbidden { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Domain {
                message, details, ..
            } => {
                tracing::debug!(error = %message, ?details, "request failed");
                message
            }
        };

        Envelope::<Value>::failure(message, status).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() {
                return AppError::bad_request(
                    "Referenced record does not exist",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        AppError::internal("Database error", json!({ "source": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}
