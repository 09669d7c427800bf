//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.jobrun/config.toml` (global user preferences)
//! 3. **Project config** - `./.jobrun/config.toml` (project-specific overrides)

use crate::config::types::{JobrunConfig, LabelConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::PathBuf;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    if let Some(ConfigError::IoError { source }) = e.downcast_ref::<ConfigError>() {
        return source.kind() == std::io::ErrorKind::NotFound;
    }

    false
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.jobrun/config.toml`)
/// 3. Project config (`./.jobrun/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<JobrunConfig, Box<dyn std::error::Error>> {
    let mut config = JobrunConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.jobrun/config.toml.
fn load_user_config() -> Result<JobrunConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".jobrun").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.jobrun/config.toml.
fn load_project_config() -> Result<JobrunConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".jobrun").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<JobrunConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError { source: e })?;
    let config: JobrunConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        }
    })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
pub fn merge_configs(base: JobrunConfig, override_config: JobrunConfig) -> JobrunConfig {
    JobrunConfig {
        labels: LabelConfig {
            namespace: override_config.labels.namespace.or(base.labels.namespace),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_override_namespace() {
        let base = JobrunConfig {
            labels: LabelConfig {
                namespace: Some("org.base".to_string()),
            },
        };
        let override_config = JobrunConfig {
            labels: LabelConfig {
                namespace: Some("org.override".to_string()),
            },
        };

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.labels.namespace.as_deref(), Some("org.override"));
    }

    #[test]
    fn test_merge_keeps_base_when_override_absent() {
        let base = JobrunConfig {
            labels: LabelConfig {
                namespace: Some("org.base".to_string()),
            },
        };
        let merged = merge_configs(base, JobrunConfig::default());
        assert_eq!(merged.labels.namespace.as_deref(), Some("org.base"));
    }

    #[test]
    fn test_load_config_file_missing_is_not_found() {
        let path = PathBuf::from("/nonexistent/.jobrun/config.toml");
        let err = load_config_file(&path).expect_err("missing file should error");
        assert!(is_file_not_found(err.as_ref()));
    }

    #[test]
    fn test_load_config_file_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "labels = not valid toml").expect("write");

        let err = load_config_file(&path).expect_err("invalid TOML should error");
        assert!(!is_file_not_found(err.as_ref()));
    }
}
