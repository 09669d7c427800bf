//! Resource labels.
//!
//! Labels are the sole means of rediscovering a job's containers after the
//! fact. Every container created for a job carries the invocation-id label;
//! containers created for a pipeline step additionally carry a container-type
//! label naming their role.

use crate::config::JobrunConfig;
use crate::runtime::LabelSelector;
use std::fmt;

/// Default namespace prefix for agent-stamped labels.
pub const DEFAULT_NAMESPACE: &str = "org.jobrun";

/// A container's role within the pipeline.
///
/// Output containers deliberately have no role value here: the exit path
/// must never target them by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerRole {
    Input,
    Step,
    Data,
}

impl ContainerRole {
    pub fn label_value(&self) -> &'static str {
        match self {
            ContainerRole::Input => "input",
            ContainerRole::Step => "step",
            ContainerRole::Data => "data",
        }
    }
}

impl fmt::Display for ContainerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_value())
    }
}

/// Label key factory scoped to a namespace.
///
/// Selectors built here always carry the invocation-id pair, so sweeps for
/// one invocation can never match another invocation's containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    namespace: String,
}

impl Labels {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Build from config, falling back to [`DEFAULT_NAMESPACE`].
    pub fn from_config(config: &JobrunConfig) -> Self {
        Self::new(
            config
                .labels
                .namespace
                .as_deref()
                .unwrap_or(DEFAULT_NAMESPACE),
        )
    }

    /// Key of the label carrying the invocation id.
    pub fn invocation_key(&self) -> String {
        format!("{}.invocation-id", self.namespace)
    }

    /// Key of the label carrying a container's pipeline role.
    pub fn type_key(&self) -> String {
        format!("{}.container-type", self.namespace)
    }

    /// Selector matching every container the invocation created, whatever
    /// its role. Used for the unqualified exit-time sweep.
    pub fn job_selector(&self, invocation_id: &str) -> LabelSelector {
        LabelSelector::new().with(self.invocation_key(), invocation_id)
    }

    /// Selector matching the invocation's containers of one role.
    pub fn role_selector(&self, invocation_id: &str, role: ContainerRole) -> LabelSelector {
        LabelSelector::new()
            .with(self.invocation_key(), invocation_id)
            .with(self.type_key(), role.label_value())
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelConfig;

    #[test]
    fn test_default_label_keys() {
        let labels = Labels::default();
        assert_eq!(labels.invocation_key(), "org.jobrun.invocation-id");
        assert_eq!(labels.type_key(), "org.jobrun.container-type");
    }

    #[test]
    fn test_from_config_override() {
        let config = JobrunConfig {
            labels: LabelConfig {
                namespace: Some("org.example".to_string()),
            },
        };
        let labels = Labels::from_config(&config);
        assert_eq!(labels.invocation_key(), "org.example.invocation-id");
    }

    #[test]
    fn test_from_config_default() {
        let labels = Labels::from_config(&JobrunConfig::default());
        assert_eq!(labels, Labels::default());
    }

    #[test]
    fn test_job_selector_carries_only_invocation_pair() {
        let selector = Labels::default().job_selector("job-42");
        assert_eq!(
            selector.pairs(),
            &[("org.jobrun.invocation-id".to_string(), "job-42".to_string())]
        );
    }

    #[test]
    fn test_role_selector_carries_both_pairs() {
        let selector = Labels::default().role_selector("job-42", ContainerRole::Data);
        assert_eq!(
            selector.pairs(),
            &[
                ("org.jobrun.invocation-id".to_string(), "job-42".to_string()),
                ("org.jobrun.container-type".to_string(), "data".to_string()),
            ]
        );
    }

    #[test]
    fn test_role_label_values() {
        assert_eq!(ContainerRole::Input.label_value(), "input");
        assert_eq!(ContainerRole::Step.label_value(), "step");
        assert_eq!(ContainerRole::Data.label_value(), "data");
    }
}
