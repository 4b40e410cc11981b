use axum::{http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;

use crate::form::FieldErrors;
use crate::model::notification::Notification;
use crate::repository::repository_error::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandlerErrorKind {
    Validation,
    Internal,
    Unauthorized,
    Forbidden,
    Conflict,
    BadRequest,
    Upstream,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Internal => "Internal",
            HandlerErrorKind::Unauthorized => "Unauthorized",
            HandlerErrorKind::Forbidden => "Forbidden",
            HandlerErrorKind::Conflict => "Conflict",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Upstream => "Upstream",
        };
        write!(f, "{}", s)
    }
}

impl HandlerErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            HandlerErrorKind::Forbidden => StatusCode::FORBIDDEN,
            HandlerErrorKind::Conflict => StatusCode::CONFLICT,
            HandlerErrorKind::Upstream => StatusCode::BAD_GATEWAY,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body. `fields` carries per-field messages for form errors,
/// `notice` the toast the page should show.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notification>,
}

impl HandlerError {
    pub fn new(error: HandlerErrorKind, message: impl Into<String>) -> Self {
        HandlerError {
            error,
            message: message.into(),
            fields: None,
            notice: None,
        }
    }

    pub fn validation(fields: FieldErrors) -> Self {
        HandlerError {
            fields: Some(fields),
            ..HandlerError::new(HandlerErrorKind::Validation, "Validation failed")
        }
    }

    /// Error whose message is the notification's description.
    pub fn notice(error: HandlerErrorKind, notice: Notification) -> Self {
        HandlerError {
            notice: Some(notice.clone()),
            ..HandlerError::new(error, notice.description)
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        (status, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    NotFound(String),
    InvalidInput(String),
    Unauthorized(String),
    Upstream(String),
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::Upstream(msg) => write!(f, "Upstream Error: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::PermissionDenied(msg) => ServiceError::Unauthorized(msg),
            RepositoryError::DatabaseError(msg) | RepositoryError::ConnectionError(msg) => ServiceError::Upstream(msg),
            RepositoryError::SerializationError(msg) => ServiceError::InternalError(msg),
        }
    }
}
