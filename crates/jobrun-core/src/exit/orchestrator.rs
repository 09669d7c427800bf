use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::cleanup::handler;
use crate::cleanup::types::CleanupReport;
use crate::job::{JobInvocation, Labels, TerminalStatus};
use crate::runtime::ContainerRuntime;

/// Caller-side endpoints of the exit handshake.
///
/// Both channels are single-use: `signal` delivers the terminal status
/// exactly once, and `completion` resolves exactly once with the same
/// status after cleanup has finished.
pub struct ExitHandle {
    signal: oneshot::Sender<TerminalStatus>,
    completion: oneshot::Receiver<TerminalStatus>,
}

impl ExitHandle {
    /// Split into raw endpoints, for when the signal comes from a different
    /// task than the one waiting on finalization.
    pub fn split(
        self,
    ) -> (
        oneshot::Sender<TerminalStatus>,
        oneshot::Receiver<TerminalStatus>,
    ) {
        (self.signal, self.completion)
    }

    /// Deliver the status and wait for cleanup to finish.
    ///
    /// Returns `None` if the orchestrator task is already gone.
    pub async fn finalize(self, status: TerminalStatus) -> Option<TerminalStatus> {
        let (signal, completion) = self.split();
        if signal.send(status).is_err() {
            return None;
        }
        completion.await.ok()
    }
}

/// Two-state machine handling one job invocation's exit.
///
/// Waiting: blocked on the signal channel (the only suspension point).
/// Cleaning: classifies the received status and runs the matching teardown
/// sequence synchronously and in order, then sends the status on the
/// completion channel and terminates.
pub struct ExitOrchestrator<R> {
    runtime: Arc<R>,
    job: JobInvocation,
    labels: Labels,
}

impl<R: ContainerRuntime + 'static> ExitOrchestrator<R> {
    pub fn new(runtime: Arc<R>, job: JobInvocation, labels: Labels) -> Self {
        Self {
            runtime,
            job,
            labels,
        }
    }

    /// Spawn the orchestrator onto its own task and return the caller-side
    /// handle. The job runner keeps executing (or blocks on the completion
    /// endpoint) while cleanup proceeds.
    pub fn spawn(self) -> ExitHandle {
        let (signal_tx, signal_rx) = oneshot::channel();
        let (completion_tx, completion_rx) = oneshot::channel();

        tokio::spawn(async move {
            self.run(signal_rx, completion_tx).await;
        });

        ExitHandle {
            signal: signal_tx,
            completion: completion_rx,
        }
    }

    /// Wait for the terminal status, run the matching teardown, echo the
    /// status on the completion channel.
    ///
    /// Returns the cleanup report, or `None` if the signal sender was
    /// dropped without delivering a status — no status means no
    /// classification, and guessing could remove output containers that a
    /// live run still needs.
    pub async fn run(
        self,
        signal: oneshot::Receiver<TerminalStatus>,
        completion: oneshot::Sender<TerminalStatus>,
    ) -> Option<CleanupReport> {
        let status = match signal.await {
            Ok(status) => status,
            Err(_) => {
                warn!(
                    event = "core.exit.signal_dropped",
                    invocation_id = %self.job.invocation_id,
                    "Exit signal sender dropped without a status, skipping cleanup"
                );
                return None;
            }
        };

        warn!(
            event = "core.exit.signal_received",
            invocation_id = %self.job.invocation_id,
            status = %status,
            "Received terminal status, cleaning up"
        );

        let report = self.clean_up(status);

        info!(
            event = "core.exit.cleanup_completed",
            invocation_id = %self.job.invocation_id,
            status = %status,
            removed = report.removed_count(),
            failed = report.failure_count()
        );

        if completion.send(status).is_err() {
            warn!(
                event = "core.exit.completion_receiver_dropped",
                invocation_id = %self.job.invocation_id
            );
        }

        Some(report)
    }

    fn clean_up(&self, status: TerminalStatus) -> CleanupReport {
        let runtime = &*self.runtime;
        let id = self.job.invocation_id.as_str();
        let mut report = CleanupReport::new();

        if status.is_killed() {
            // A kill can leave containers mid-operation. Yank the
            // input/step/data containers even if they are running, but leave
            // output containers alone so any in-flight fall-through output
            // handling can still run. Images go first: a killed run's images
            // are not worth keeping.
            report.extend(handler::remove_data_container_images(runtime, &self.job));
            report.extend(handler::remove_input_containers(runtime, &self.labels, id));
            report.extend(handler::remove_step_containers(runtime, &self.labels, id));
            report.extend(handler::remove_data_containers(runtime, &self.labels, id));
            report.record(handler::remove_volume(runtime, id));
            report.extend(handler::remove_job_containers(runtime, &self.labels, id));
        } else {
            // The run's own teardown already handled most containers on a
            // normal or failed completion; a light sweep suffices.
            report.extend(handler::remove_job_containers(runtime, &self.labels, id));
            report.record(handler::remove_volume(runtime, id));
        }

        report.finish();
        report
    }
}
