//! JSON error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use linkpage_core::LinkpageError;
use serde_json::json;
use tracing::{debug, error};

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body is always `{"message": "..."}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.message }));
        (self.status, body).into_response()
    }
}

impl From<LinkpageError> for ApiError {
    fn from(e: LinkpageError) -> Self {
        match e {
            LinkpageError::NotFound(what) => ApiError::not_found(format!("{} not found", what)),
            LinkpageError::InvalidInput(reason) => {
                debug!("Rejected input: {}", reason);
                ApiError::new(StatusCode::BAD_REQUEST, format!("Invalid data: {}", reason))
            }
            LinkpageError::PaymentUnavailable => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Payment provider not configured",
            ),
            other => {
                error!("Request failed: {}", other);
                ApiError::internal("Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid data")
    }
}
