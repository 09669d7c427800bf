//! Job invocation model.
//!
//! One [`JobInvocation`] describes one pipeline run: its unique invocation
//! id and the data containers mounted into it. The orchestrator only reads
//! this; the surrounding job runner owns it. Containers are rediscovered
//! after the fact purely through [`Labels`] — no in-memory registry is kept.

pub mod errors;
pub mod labels;
pub mod persistence;
pub mod types;

// Public API exports
pub use errors::JobError;
pub use labels::{ContainerRole, Labels};
pub use persistence::{load_job, save_job};
pub use types::{DataContainer, JobInvocation, TerminalStatus};
