//! HTTP-facing error type.
//!
//! [`AppError`] is what handlers return. It renders as
//! `{"error": {"code", "message", "details"}}` with a status code chosen by
//! variant. Messages are safe to show to callers: resolution failures are
//! converted through [`From<ResolveError>`], which never includes the
//! outbound URL or the resource id.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::ResolveError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload rendered inside the `error` field.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input is malformed. 400.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Media host is throttling us; the caller may retry later. 429.
    #[error("{message}")]
    RateLimited { message: String, details: Value },

    /// Media host answered with an error or was unreachable. 500.
    #[error("{message}")]
    Upstream { message: String, details: Value },

    /// Anything else. 500.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn rate_limited(message: impl Into<String>, details: Value) -> Self {
        Self::RateLimited {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::RateLimited { .. } => "rate_limited",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::RateLimited { message, details }
            | AppError::Upstream { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::InvalidUrl => AppError::bad_request("Invalid URL format", json!({})),
            ResolveError::UpstreamRateLimited => AppError::rate_limited(
                "Too many requests to the media host, try again later",
                json!({}),
            ),
            ResolveError::UpstreamError { status, detail } => AppError::upstream(
                format!("Media host error: {detail}"),
                json!({ "upstream_status": status }),
            ),
            ResolveError::UpstreamMalformedResponse => {
                AppError::internal("Unexpected response from media host", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}
