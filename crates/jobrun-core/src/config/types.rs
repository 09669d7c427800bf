//! Configuration type definitions for the jobrun agent.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [labels]
//! namespace = "org.example.pipelines"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.jobrun/config.toml`
/// 2. Project config: `./.jobrun/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobrunConfig {
    /// Label stamping configuration
    #[serde(default)]
    pub labels: LabelConfig,
}

/// Label stamping configuration.
///
/// Every container the agent creates is stamped with labels under a common
/// namespace prefix; cleanup rediscovers resources through those labels.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LabelConfig {
    /// Namespace prefix for agent-stamped labels.
    /// Default: `org.jobrun`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_namespace_override() {
        let config = JobrunConfig::default();
        assert!(config.labels.namespace.is_none());
    }

    #[test]
    fn test_config_parses_label_namespace() {
        let config: JobrunConfig = toml::from_str(
            r#"
            [labels]
            namespace = "org.example.pipelines"
            "#,
        )
        .expect("valid config");
        assert_eq!(
            config.labels.namespace.as_deref(),
            Some("org.example.pipelines")
        );
    }

    #[test]
    fn test_empty_config_parses() {
        let config: JobrunConfig = toml::from_str("").expect("empty config is valid");
        assert!(config.labels.namespace.is_none());
    }
}
