use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eventintel_common::error::EventIntelError;
use serde_json::json;
use thiserror::Error;

/// Errors that escape a handler as an HTTP status. Discovery failures are
/// not among them: those are reported inside the envelope with a 200.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    /// The body could not be read as the expected JSON shape.
    #[error("{message}")]
    Body { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<EventIntelError> for ApiError {
    fn from(err: EventIntelError) -> Self {
        match err {
            EventIntelError::InvalidRequest(msg) => ApiError::Validation(msg),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Body { status, .. } => *status,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
