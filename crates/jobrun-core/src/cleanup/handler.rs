//! Cleanup routines.
//!
//! Named, fixed-order compositions of the reclaimer primitives. The ordering
//! inside each routine is a correctness requirement, not an optimization:
//! ephemeral input/step containers go before data containers (which may be
//! mounted by others), and the volume goes after them, once nothing still
//! references it. Every routine is best-effort; failures surface only in the
//! returned outcomes and the log.

use tracing::info;

use crate::cleanup::operations;
use crate::cleanup::types::{CleanupReport, ReclaimOutcome};
use crate::job::{ContainerRole, JobInvocation, Labels};
use crate::runtime::ContainerRuntime;

/// Remove all input containers the invocation created.
pub fn remove_input_containers<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    labels: &Labels,
    invocation_id: &str,
) -> Vec<ReclaimOutcome> {
    info!(
        event = "core.cleanup.input_containers_started",
        invocation_id = invocation_id
    );
    operations::remove_containers_matching(
        runtime,
        &labels.role_selector(invocation_id, ContainerRole::Input),
    )
}

/// Remove all step containers the invocation created.
pub fn remove_step_containers<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    labels: &Labels,
    invocation_id: &str,
) -> Vec<ReclaimOutcome> {
    info!(
        event = "core.cleanup.step_containers_started",
        invocation_id = invocation_id
    );
    operations::remove_containers_matching(
        runtime,
        &labels.role_selector(invocation_id, ContainerRole::Step),
    )
}

/// Remove all data containers the invocation created.
///
/// Data containers are infrastructure mounts, distinguished from step
/// containers by their container-type label.
pub fn remove_data_containers<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    labels: &Labels,
    invocation_id: &str,
) -> Vec<ReclaimOutcome> {
    info!(
        event = "core.cleanup.data_containers_started",
        invocation_id = invocation_id
    );
    operations::remove_containers_matching(
        runtime,
        &labels.role_selector(invocation_id, ContainerRole::Data),
    )
}

/// Remove every container carrying the invocation label, whatever its role.
/// The catch-all sweep run at exit time.
pub fn remove_job_containers<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    labels: &Labels,
    invocation_id: &str,
) -> Vec<ReclaimOutcome> {
    info!(
        event = "core.cleanup.job_containers_started",
        invocation_id = invocation_id
    );
    operations::remove_containers_matching(runtime, &labels.job_selector(invocation_id))
}

/// Remove the images backing the job's data containers.
///
/// Driven by the job descriptor's name/tag list, not label discovery: images
/// carry no invocation labels.
pub fn remove_data_container_images<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    job: &JobInvocation,
) -> Vec<ReclaimOutcome> {
    info!(
        event = "core.cleanup.data_images_started",
        invocation_id = %job.invocation_id,
        count = job.data_containers.len()
    );
    job.data_containers
        .iter()
        .map(|dc| operations::remove_image(runtime, &dc.name, &dc.tag))
        .collect()
}

/// Remove the invocation's working volume, if it still exists.
/// The invocation id is the volume identifier.
pub fn remove_volume<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    invocation_id: &str,
) -> ReclaimOutcome {
    operations::remove_volume(runtime, invocation_id)
}

/// Mid-run teardown invoked when a failure is detected while the job is
/// still executing: input, step, and data containers, then the volume.
///
/// Distinct from the exit-time sequences; it leaves images and the
/// unqualified job-container sweep to the exit path.
pub fn aggressive_cleanup<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    labels: &Labels,
    job: &JobInvocation,
) -> CleanupReport {
    info!(
        event = "core.cleanup.aggressive_started",
        invocation_id = %job.invocation_id
    );

    let mut report = CleanupReport::new();
    report.extend(remove_input_containers(runtime, labels, &job.invocation_id));
    report.extend(remove_step_containers(runtime, labels, &job.invocation_id));
    report.extend(remove_data_containers(runtime, labels, &job.invocation_id));
    report.record(remove_volume(runtime, &job.invocation_id));
    report.finish();

    info!(
        event = "core.cleanup.aggressive_completed",
        invocation_id = %job.invocation_id,
        removed = report.removed_count(),
        failed = report.failure_count()
    );
    report
}
