//! Exit-time cleanup orchestration.
//!
//! The [`ExitOrchestrator`] runs on its own task, blocks until the runner
//! delivers the job's terminal status, tears down the invocation's resources
//! in an order chosen by how the job ended, then echoes the status back so
//! the caller waiting on finalization can proceed. Single-shot: one
//! orchestrator handles one invocation's exit exactly once.

mod orchestrator;

// Public API exports
pub use orchestrator::{ExitHandle, ExitOrchestrator};
