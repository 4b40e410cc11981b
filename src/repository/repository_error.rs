use std::fmt;

use crate::util::backend::BackendError;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(String),
    PermissionDenied(String),
    ValidationError(String),
    DatabaseError(String),
    ConnectionError(String),
    SerializationError(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            RepositoryError::PermissionDenied(msg) => write!(f, "Permission Denied: {}", msg),
            RepositoryError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            RepositoryError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            RepositoryError::ConnectionError(msg) => write!(f, "Connection Error: {}", msg),
            RepositoryError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

// Convenient constructors
impl RepositoryError {
    pub fn permission_denied<T: Into<String>>(msg: T) -> Self {
        RepositoryError::PermissionDenied(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        RepositoryError::ConnectionError(msg.into())
    }
}

// Hosted REST API conversions
impl From<BackendError> for RepositoryError {
    fn from(err: BackendError) -> Self {
        match &err {
            BackendError::Transport(_) => RepositoryError::ConnectionError(format!("Transport error: {}", err)),
            BackendError::Decode(_) => RepositoryError::SerializationError(err.to_string()),
            BackendError::Config(_) => RepositoryError::ConnectionError(err.to_string()),
            BackendError::Api { status, code, .. } => match (*status, code.as_deref()) {
                // 42501: insufficient_privilege, raised by row-level policies
                (401, _) | (403, _) | (_, Some("42501")) => RepositoryError::PermissionDenied(err.message()),
                (404, _) => RepositoryError::NotFound(err.message()),
                (400, _) | (409, _) | (422, _) => RepositoryError::ValidationError(err.message()),
                _ => RepositoryError::DatabaseError(err.message()),
            },
        }
    }
}

// Result type alias for convenience
pub type RepositoryResult<T> = Result<T, RepositoryError>;
