//! Best-effort teardown of a job invocation's containers, volume, and images.
//!
//! Two layers: [`operations`] holds the reclaimer primitives (one removal
//! each, every failure absorbed), and [`handler`] composes them into the
//! named fixed-order routines the exit orchestrator runs. Nothing in this
//! module returns an error: teardown must never be blocked by a single
//! missing or already-gone resource, so outcomes carry an optional error
//! for observability and control flow always proceeds.

pub mod handler;
mod operations;
pub mod types;

// Public API exports
pub use handler::{
    aggressive_cleanup, remove_data_container_images, remove_data_containers,
    remove_input_containers, remove_job_containers, remove_step_containers, remove_volume,
};
pub use types::{CleanupReport, ReclaimOutcome, ReclaimedResource};
