//! Reclaimer primitives.
//!
//! Each primitive performs one removal against the container runtime and
//! absorbs every failure: errors are logged, recorded on the outcome, and
//! never propagated. Invoking a primitive on an already-gone resource is a
//! no-op, so repeat invocation is always safe.

use tracing::{error, info};

use crate::cleanup::types::{ReclaimOutcome, ReclaimedResource};
use crate::runtime::{ContainerRuntime, LabelSelector};

/// Remove the volume with the given identifier, if it exists.
///
/// If the existence check itself fails, no removal is attempted: removing on
/// an indeterminate precondition could race a live container mount.
pub(crate) fn remove_volume<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    id: &str,
) -> ReclaimOutcome {
    let resource = ReclaimedResource::Volume { id: id.to_string() };

    let has_volume = match runtime.volume_exists(id) {
        Ok(has_volume) => has_volume,
        Err(e) => {
            error!(event = "core.cleanup.volume_check_failed", volume = id, error = %e);
            return ReclaimOutcome::failed(resource, e.to_string());
        }
    };

    if !has_volume {
        return ReclaimOutcome::skipped(resource);
    }

    info!(event = "core.cleanup.volume_remove_started", volume = id);
    match runtime.remove_volume(id) {
        Ok(()) => ReclaimOutcome::removed(resource),
        Err(e) => {
            error!(event = "core.cleanup.volume_remove_failed", volume = id, error = %e);
            ReclaimOutcome::failed(resource, e.to_string())
        }
    }
}

/// Forcibly remove every container matching the selector, stopped ones
/// included.
///
/// A listing failure is treated as an empty match set. Per-container
/// failures are recorded individually and do not abort the remaining
/// removals.
pub(crate) fn remove_containers_matching<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    selector: &LabelSelector,
) -> Vec<ReclaimOutcome> {
    info!(event = "core.cleanup.container_sweep_started", selector = %selector);

    let containers = match runtime.list_containers(selector, true) {
        Ok(containers) => containers,
        Err(e) => {
            error!(
                event = "core.cleanup.container_list_failed",
                selector = %selector,
                error = %e
            );
            Vec::new()
        }
    };

    let mut outcomes = Vec::with_capacity(containers.len());
    for id in containers {
        info!(event = "core.cleanup.container_nuke_started", container = %id);
        let resource = ReclaimedResource::Container { id: id.clone() };
        match runtime.nuke_container(&id) {
            Ok(()) => outcomes.push(ReclaimOutcome::removed(resource)),
            Err(e) => {
                error!(
                    event = "core.cleanup.container_nuke_failed",
                    container = %id,
                    error = %e
                );
                outcomes.push(ReclaimOutcome::failed(resource, e.to_string()));
            }
        }
    }
    outcomes
}

/// Remove one image reference.
pub(crate) fn remove_image<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    name: &str,
    tag: &str,
) -> ReclaimOutcome {
    let resource = ReclaimedResource::Image {
        name: name.to_string(),
        tag: tag.to_string(),
    };

    info!(event = "core.cleanup.image_nuke_started", image = %format!("{}:{}", name, tag));
    match runtime.nuke_image(name, tag) {
        Ok(()) => ReclaimOutcome::removed(resource),
        Err(e) => {
            error!(
                event = "core.cleanup.image_nuke_failed",
                image = %format!("{}:{}", name, tag),
                error = %e
            );
            ReclaimOutcome::failed(resource, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeError;
    use std::sync::Mutex;

    /// Runtime stub with scriptable failure points.
    struct StubRuntime {
        volume_present: bool,
        volume_check_fails: bool,
        volume_remove_fails: bool,
        listing: Result<Vec<String>, ()>,
        failing_containers: Vec<String>,
        nuked: Mutex<Vec<String>>,
    }

    impl StubRuntime {
        fn new() -> Self {
            Self {
                volume_present: true,
                volume_check_fails: false,
                volume_remove_fails: false,
                listing: Ok(Vec::new()),
                failing_containers: Vec::new(),
                nuked: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContainerRuntime for StubRuntime {
        fn volume_exists(&self, _id: &str) -> Result<bool, RuntimeError> {
            if self.volume_check_fails {
                return Err(RuntimeError::Unavailable {
                    message: "daemon not responding".to_string(),
                });
            }
            Ok(self.volume_present)
        }

        fn remove_volume(&self, id: &str) -> Result<(), RuntimeError> {
            if self.volume_remove_fails {
                return Err(RuntimeError::ApiError {
                    message: "volume in use".to_string(),
                });
            }
            self.nuked.lock().unwrap().push(format!("volume:{}", id));
            Ok(())
        }

        fn list_containers(
            &self,
            _selector: &LabelSelector,
            _include_stopped: bool,
        ) -> Result<Vec<String>, RuntimeError> {
            self.listing.clone().map_err(|_| RuntimeError::ApiError {
                message: "listing failed".to_string(),
            })
        }

        fn nuke_container(&self, id: &str) -> Result<(), RuntimeError> {
            if self.failing_containers.iter().any(|c| c == id) {
                return Err(RuntimeError::PermissionDenied { id: id.to_string() });
            }
            self.nuked.lock().unwrap().push(id.to_string());
            Ok(())
        }

        fn nuke_image(&self, name: &str, _tag: &str) -> Result<(), RuntimeError> {
            self.nuked.lock().unwrap().push(format!("image:{}", name));
            Ok(())
        }
    }

    #[test]
    fn test_remove_volume_present() {
        let runtime = StubRuntime::new();
        let outcome = remove_volume(&runtime, "job-42");
        assert!(outcome.removed);
        assert!(outcome.error.is_none());
        assert_eq!(*runtime.nuked.lock().unwrap(), vec!["volume:job-42"]);
    }

    #[test]
    fn test_remove_volume_already_gone_is_noop() {
        let mut runtime = StubRuntime::new();
        runtime.volume_present = false;

        // Two attempts on a gone volume: both no-ops, no error escalation.
        for _ in 0..2 {
            let outcome = remove_volume(&runtime, "job-42");
            assert!(!outcome.removed);
            assert!(outcome.error.is_none());
        }
        assert!(runtime.nuked.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_volume_check_failure_skips_removal() {
        let mut runtime = StubRuntime::new();
        runtime.volume_check_fails = true;

        let outcome = remove_volume(&runtime, "job-42");
        assert!(!outcome.removed);
        assert!(outcome.error.is_some());
        // Indeterminate precondition: removal must not have been attempted.
        assert!(runtime.nuked.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_volume_removal_failure_is_recorded() {
        let mut runtime = StubRuntime::new();
        runtime.volume_remove_fails = true;

        let outcome = remove_volume(&runtime, "job-42");
        assert!(!outcome.removed);
        assert_eq!(outcome.error.as_deref(), Some("Runtime API call failed: volume in use"));
    }

    #[test]
    fn test_listing_failure_yields_empty_match_set() {
        let mut runtime = StubRuntime::new();
        runtime.listing = Err(());

        let outcomes = remove_containers_matching(&runtime, &LabelSelector::new());
        assert!(outcomes.is_empty());
        assert!(runtime.nuked.lock().unwrap().is_empty());
    }

    #[test]
    fn test_per_container_failure_does_not_abort_siblings() {
        let mut runtime = StubRuntime::new();
        runtime.listing = Ok(vec!["c1".to_string(), "c2".to_string(), "c3".to_string()]);
        runtime.failing_containers = vec!["c2".to_string()];

        let outcomes = remove_containers_matching(&runtime, &LabelSelector::new());
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].removed);
        assert!(outcomes[1].error.is_some());
        assert!(outcomes[2].removed);
        assert_eq!(*runtime.nuked.lock().unwrap(), vec!["c1", "c3"]);
    }

    #[test]
    fn test_remove_image() {
        let runtime = StubRuntime::new();
        let outcome = remove_image(&runtime, "ref-data", "v3");
        assert!(outcome.removed);
        assert_eq!(*runtime.nuked.lock().unwrap(), vec!["image:ref-data"]);
    }
}
