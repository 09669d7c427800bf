use crate::errors::JobrunError;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Job file not found at '{path}'")]
    NotFound { path: String },

    #[error("Failed to parse job file: {message}")]
    ParseError { message: String },

    #[error("IO error reading job file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl JobrunError for JobError {
    fn error_code(&self) -> &'static str {
        match self {
            JobError::NotFound { .. } => "JOB_FILE_NOT_FOUND",
            JobError::ParseError { .. } => "JOB_PARSE_ERROR",
            JobError::IoError { .. } => "JOB_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, JobError::NotFound { .. } | JobError::ParseError { .. })
    }
}
