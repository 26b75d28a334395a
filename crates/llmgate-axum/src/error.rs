//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and JSON bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use llmgate_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Message used for every body that fails extraction or validation.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Offending field, or `body` when the payload itself is unreadable.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request body is malformed or fails validation (400).
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Server is missing required configuration (500).
    #[error("{0}")]
    Configuration(String),

    /// The upstream provider call failed (502). Message is client-safe.
    #[error("{0}")]
    BadGateway(String),
}

impl HttpError {
    /// Validation failure with field-level detail.
    pub fn invalid_body(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: INVALID_BODY_MESSAGE.to_string(),
            errors,
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (detail, errors) = match self {
            Self::Validation { message, errors } => (message, errors),
            Self::Configuration(msg) | Self::BadGateway(msg) => (msg, Vec::new()),
        };

        let body = ErrorBody {
            detail,
            status: status.as_u16(),
            errors,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => HttpError::Validation {
                message: msg,
                errors: Vec::new(),
            },
            CoreError::Configuration(msg) => HttpError::Configuration(msg),
            // The cause was already logged by the gateway service.
            CoreError::Gateway { message, .. } => HttpError::BadGateway(message),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        let field = match &rejection {
            JsonRejection::JsonDataError(_) => {
                missing_field(&rejection.body_text()).unwrap_or_else(|| "body".to_string())
            }
            _ => "body".to_string(),
        };
        HttpError::invalid_body(vec![FieldError::new(field, rejection.body_text())])
    }
}

/// Pull the field name out of serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<String> {
    let start = message.find("missing field `")? + "missing field `".len();
    let len = message[start..].find('`')?;
    Some(message[start..start + len].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmgate_core::UpstreamError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            HttpError::invalid_body(vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HttpError::Configuration("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            HttpError::BadGateway("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_gateway_error_drops_cause() {
        let core = CoreError::gateway(
            "Failed to fetch completion from OpenAI",
            UpstreamError::Network("secret internal detail".to_string()),
        );
        let http = HttpError::from(core);
        assert_eq!(http.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(http.to_string(), "Failed to fetch completion from OpenAI");
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            missing_field(
                "Failed to deserialize the JSON body into the target type: missing field `prompt` at line 1 column 2"
            ),
            Some("prompt".to_string())
        );
        assert_eq!(missing_field("invalid type: integer"), None);
    }
}
