use serde::{Deserialize, Serialize};
use std::fmt;

/// A single resource the reclaimer attempted to remove.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReclaimedResource {
    Container { id: String },
    Volume { id: String },
    Image { name: String, tag: String },
}

impl fmt::Display for ReclaimedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReclaimedResource::Container { id } => write!(f, "container {}", id),
            ReclaimedResource::Volume { id } => write!(f, "volume {}", id),
            ReclaimedResource::Image { name, tag } => write!(f, "image {}:{}", name, tag),
        }
    }
}

/// Outcome of one removal attempt.
///
/// `error` is observational only: whatever it holds, the sequence that
/// produced this outcome has already moved on to the next resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReclaimOutcome {
    pub resource: ReclaimedResource,

    /// False when the resource was already gone and the attempt was a no-op.
    pub removed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReclaimOutcome {
    pub fn removed(resource: ReclaimedResource) -> Self {
        Self {
            resource,
            removed: true,
            error: None,
        }
    }

    /// The resource was already gone; nothing to do.
    pub fn skipped(resource: ReclaimedResource) -> Self {
        Self {
            resource,
            removed: false,
            error: None,
        }
    }

    pub fn failed(resource: ReclaimedResource, error: impl Into<String>) -> Self {
        Self {
            resource,
            removed: false,
            error: Some(error.into()),
        }
    }
}

/// Aggregated record of one cleanup sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupReport {
    pub outcomes: Vec<ReclaimOutcome>,
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
}

impl CleanupReport {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            started_at: chrono::Utc::now().to_rfc3339(),
            finished_at: None,
        }
    }

    pub fn record(&mut self, outcome: ReclaimOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn extend(&mut self, outcomes: Vec<ReclaimOutcome>) {
        self.outcomes.extend(outcomes);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(chrono::Utc::now().to_rfc3339());
    }

    pub fn removed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.removed).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }
}

impl Default for CleanupReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(id: &str) -> ReclaimedResource {
        ReclaimedResource::Volume { id: id.to_string() }
    }

    #[test]
    fn test_report_counts() {
        let mut report = CleanupReport::new();
        report.record(ReclaimOutcome::removed(volume("a")));
        report.record(ReclaimOutcome::skipped(volume("b")));
        report.record(ReclaimOutcome::failed(volume("c"), "runtime busy"));

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.removed_count(), 1);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_finish_stamps_completion_time() {
        let mut report = CleanupReport::new();
        assert!(report.finished_at.is_none());
        report.finish();
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(
            ReclaimedResource::Image {
                name: "ref-data".to_string(),
                tag: "v3".to_string()
            }
            .to_string(),
            "image ref-data:v3"
        );
        assert_eq!(volume("job-42").to_string(), "volume job-42");
    }

    #[test]
    fn test_skipped_outcome_has_no_error() {
        let outcome = ReclaimOutcome::skipped(volume("gone"));
        assert!(!outcome.removed);
        assert!(outcome.error.is_none());
    }
}
