//! Configuration validation.

use crate::config::types::JobrunConfig;
use crate::errors::ConfigError;

/// Validate the configuration.
///
/// The label namespace ends up inside container label keys, so it must be a
/// plain dotted identifier: non-empty, no whitespace, no `=` (the key/value
/// separator in runtime label filters).
pub fn validate_config(config: &JobrunConfig) -> Result<(), ConfigError> {
    if let Some(namespace) = &config.labels.namespace {
        if namespace.is_empty() {
            return Err(ConfigError::InvalidLabelNamespace {
                namespace: namespace.clone(),
                message: "must not be empty".to_string(),
            });
        }
        if namespace.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidLabelNamespace {
                namespace: namespace.clone(),
                message: "must not contain whitespace".to_string(),
            });
        }
        if namespace.contains('=') {
            return Err(ConfigError::InvalidLabelNamespace {
                namespace: namespace.clone(),
                message: "must not contain '='".to_string(),
            });
        }
    }

    Ok(())
}
