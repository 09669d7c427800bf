//! Container-runtime capability interface.
//!
//! The agent never holds a process-wide runtime handle; everything goes
//! through [`ContainerRuntime`], injected at construction. Cleanup code
//! treats every call on this interface as fallible and non-fatal: failures
//! are logged and recorded, never propagated.

pub mod errors;

// Public API exports
pub use errors::RuntimeError;

use std::fmt;

/// An AND-set of label key/value pairs used to discover a job's containers.
///
/// A container matches when it carries every pair in the selector. Selectors
/// built from an invocation id never overlap across invocations, which is
/// what makes concurrent cleanups independent without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    pairs: Vec<(String, String)>,
}

impl LabelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair to the selector.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.pairs {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

/// Capability interface to the container runtime.
///
/// Implemented by the embedding agent against its concrete runtime client.
/// All calls may fail; callers in this crate absorb every failure.
pub trait ContainerRuntime: Send + Sync {
    /// Check whether a volume with the given identifier exists.
    fn volume_exists(&self, id: &str) -> Result<bool, RuntimeError>;

    /// Remove a volume. The volume must have no containers referencing it.
    fn remove_volume(&self, id: &str) -> Result<(), RuntimeError>;

    /// List ids of containers matching every pair in the selector.
    /// `include_stopped` extends the listing to non-running containers.
    fn list_containers(
        &self,
        selector: &LabelSelector,
        include_stopped: bool,
    ) -> Result<Vec<String>, RuntimeError>;

    /// Forcibly remove a container, running or not.
    fn nuke_container(&self, id: &str) -> Result<(), RuntimeError>;

    /// Remove one image reference.
    fn nuke_image(&self, name: &str, tag: &str) -> Result<(), RuntimeError>;
}
