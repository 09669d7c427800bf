//! jobrun-core: Exit-time resource cleanup for containerized pipeline jobs
//!
//! When a pipeline job reaches a terminal status — on its own, or because an
//! external actor forcibly killed it — the agent must reclaim every
//! container, image, and volume the invocation created, without leaking
//! resources and without letting an individual removal failure take the
//! agent down. This library is that termination path.
//!
//! # Main Entry Points
//!
//! - [`exit`] - Orchestrator that waits for the terminal status and runs teardown
//! - [`cleanup`] - Best-effort removal routines and the reclaimer beneath them
//! - [`runtime`] - Container-runtime capability interface (injected by the agent)
//! - [`job`] - Job invocation model and resource labels
//! - [`config`] - Configuration management

pub mod cleanup;
pub mod config;
pub mod errors;
pub mod exit;
pub mod job;
pub mod logging;
pub mod runtime;

// Re-export commonly used types at crate root for convenience
pub use cleanup::types::{CleanupReport, ReclaimOutcome, ReclaimedResource};
pub use config::JobrunConfig;
pub use exit::{ExitHandle, ExitOrchestrator};
pub use job::labels::{ContainerRole, Labels};
pub use job::types::{DataContainer, JobInvocation, TerminalStatus};
pub use runtime::{ContainerRuntime, LabelSelector, RuntimeError};

// Re-export handler modules as the primary API
pub use cleanup::handler as cleanup_ops;

// Re-export logging initialization
pub use logging::init_logging;
