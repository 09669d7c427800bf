//! Job descriptor persistence
//!
//! The surrounding runner hands the agent its job descriptor as a JSON file.
//! Writes are atomic (temp file then rename) so a crash never leaves a
//! half-written descriptor behind.

use crate::job::errors::JobError;
use crate::job::types::JobInvocation;
use std::fs;
use std::path::Path;

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.job.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}

pub fn save_job(job: &JobInvocation, path: &Path) -> Result<(), JobError> {
    let job_json = serde_json::to_string_pretty(job).map_err(|e| {
        tracing::error!(
            event = "core.job.serialization_failed",
            invocation_id = %job.invocation_id,
            error = %e
        );
        JobError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    })?;

    let temp_file = path.with_extension("json.tmp");

    // Write to temp file
    if let Err(e) = fs::write(&temp_file, &job_json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(JobError::IoError { source: e });
    }

    // Rename temp file to final location
    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(JobError::IoError { source: e });
    }

    Ok(())
}

pub fn load_job(path: &Path) -> Result<JobInvocation, JobError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(JobError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(JobError::IoError { source: e }),
    };

    serde_json::from_str::<JobInvocation>(&content).map_err(|e| {
        tracing::warn!(
            event = "core.job.load_invalid_json",
            file = %path.display(),
            error = %e
        );
        JobError::ParseError {
            message: e.to_string(),
        }
    })
}
