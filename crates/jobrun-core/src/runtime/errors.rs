use crate::errors::JobrunError;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Container runtime unavailable: {message}")]
    Unavailable { message: String },

    #[error("Resource '{id}' not found")]
    NotFound { id: String },

    #[error("Permission denied operating on '{id}'")]
    PermissionDenied { id: String },

    #[error("Runtime API call failed: {message}")]
    ApiError { message: String },
}

impl JobrunError for RuntimeError {
    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Unavailable { .. } => "RUNTIME_UNAVAILABLE",
            RuntimeError::NotFound { .. } => "RUNTIME_RESOURCE_NOT_FOUND",
            RuntimeError::PermissionDenied { .. } => "RUNTIME_PERMISSION_DENIED",
            RuntimeError::ApiError { .. } => "RUNTIME_API_ERROR",
        }
    }
}
