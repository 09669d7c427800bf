use serde::{Deserialize, Serialize};
use std::fmt;

/// One pipeline run, identified by a unique invocation id.
///
/// The invocation id doubles as the identifier of the run's working volume
/// and as the value of the invocation label stamped on every container the
/// run creates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobInvocation {
    pub invocation_id: String,

    /// Data containers mounted into the run, in mount order.
    #[serde(default)]
    pub data_containers: Vec<DataContainer>,
}

impl JobInvocation {
    /// Create an invocation with a freshly minted id.
    pub fn new() -> Self {
        Self {
            invocation_id: uuid::Uuid::new_v4().to_string(),
            data_containers: Vec::new(),
        }
    }

    /// Create an invocation with a caller-supplied id.
    pub fn with_id(invocation_id: impl Into<String>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            data_containers: Vec::new(),
        }
    }

    pub fn add_data_container(mut self, name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.data_containers.push(DataContainer::new(name, tag));
        self
    }
}

impl Default for JobInvocation {
    fn default() -> Self {
        Self::new()
    }
}

/// A data-container image reference (name plus tag).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataContainer {
    pub name: String,
    pub tag: String,
}

impl DataContainer {
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// The `name:tag` form used in log output.
    pub fn image_ref(&self) -> String {
        format!("{}:{}", self.name, self.tag)
    }
}

/// Why a job ended. Delivered exactly once, at job end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TerminalStatus {
    /// The run finished on its own, all steps succeeded.
    Completed,
    /// A step failed; the run's own teardown still ran.
    Failed,
    /// The run exceeded its time limit.
    TimedOut,
    /// An external actor forcibly terminated the run.
    Killed,
}

impl TerminalStatus {
    /// Whether the job was externally terminated rather than ending on its own.
    /// Killed runs get the aggressive exit-time teardown.
    pub fn is_killed(&self) -> bool {
        matches!(self, TerminalStatus::Killed)
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminalStatus::Completed => "completed",
            TerminalStatus::Failed => "failed",
            TerminalStatus::TimedOut => "timed_out",
            TerminalStatus::Killed => "killed",
        };
        write!(f, "{}", s)
    }
}
