//! Fixed-interval job poller

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tapverse_domain::{JobResult, JobState, JobStatus, PollSettings};
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::errors::ApiError;

/// What a finished poll resolved to.
///
/// A job that fails server-side is still a *successful* poll: the outcome is
/// `Ok(JobResult::Failed { .. })`. The `Err` arm is reserved for the polling
/// machinery itself giving up.
pub type PollOutcome = Result<JobResult, PollError>;

/// One status check against the backend.
///
/// Implemented by the per-resource probes ([`crate::resources::VideoStatusProbe`]
/// and friends); tests substitute scripted probes.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn check(&self, job_id: &str) -> Result<JobState, ApiError>;
}

/// Schedule knobs for a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Time between consecutive status checks. The first check happens one
    /// full interval after spawn, never immediately.
    pub interval: Duration,
    /// Consecutive failed checks tolerated before the poll is abandoned.
    /// A successful check resets the streak.
    pub max_transient_failures: u32,
    /// Wall-clock cap on the whole poll, measured from spawn.
    pub max_poll_duration: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_transient_failures: 5,
            max_poll_duration: Duration::from_secs(600),
        }
    }
}

impl From<&PollSettings> for PollingConfig {
    fn from(settings: &PollSettings) -> Self {
        Self {
            interval: Duration::from_secs(settings.interval_seconds),
            max_transient_failures: settings.max_transient_failures,
            max_poll_duration: Duration::from_secs(settings.max_poll_duration_seconds),
        }
    }
}

/// Why a poll stopped without the job reaching a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// The failure budget ran out.
    #[error("job {job_id}: {failures} consecutive status checks failed")]
    RetriesExhausted { job_id: String, failures: u32 },

    /// The job outlived the wall-clock cap.
    #[error("job {job_id}: no terminal status within {}s", deadline.as_secs())]
    DeadlineExceeded { job_id: String, deadline: Duration },

    /// The handle was cancelled or dropped.
    #[error("polling cancelled")]
    Cancelled,
}

/// Spawns fixed-interval polls for acknowledged jobs.
#[derive(Debug, Clone)]
pub struct JobPoller {
    config: PollingConfig,
}

impl JobPoller {
    pub fn new(config: PollingConfig) -> Self {
        Self { config }
    }

    /// Start polling `job_id` through `probe`.
    ///
    /// The returned handle owns the poll: dropping it cancels the worker,
    /// and no status checks are issued after cancellation.
    #[instrument(skip(self, probe), fields(job_id = %job_id.as_ref()))]
    pub fn spawn(&self, job_id: impl AsRef<str>, probe: Arc<dyn StatusProbe>) -> JobHandle {
        let job_id = job_id.as_ref().to_string();
        let cancel = CancellationToken::new();
        let (status_tx, status_rx) = watch::channel(JobStatus::Processing);
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let worker = PollWorker {
            job_id: job_id.clone(),
            config: self.config,
            probe,
            cancel: cancel.clone(),
            status: status_tx,
        };
        tokio::spawn(async move {
            if let Some(outcome) = worker.run().await {
                // the receiver may be gone; the poll result is then simply unobserved
                let _ = outcome_tx.send(outcome);
            }
        });

        debug!("poll started");
        JobHandle {
            job_id,
            cancel,
            status: status_rx,
            outcome: Some(outcome_rx),
        }
    }
}

/// Observer side of one running poll.
pub struct JobHandle {
    job_id: String,
    cancel: CancellationToken,
    status: watch::Receiver<JobStatus>,
    outcome: Option<oneshot::Receiver<PollOutcome>>,
}

impl JobHandle {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Last status the worker observed. Starts as `processing` before the
    /// first check, since the ack itself means the job is running.
    pub fn status(&self) -> JobStatus {
        *self.status.borrow()
    }

    /// Stop the poll. Idempotent; an in-flight check is aborted and no
    /// further checks are issued.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the poll to resolve.
    pub async fn outcome(mut self) -> PollOutcome {
        match self.outcome.take() {
            Some(receiver) => match receiver.await {
                Ok(outcome) => outcome,
                // sender dropped without a send: the worker was cancelled
                Err(_) => Err(PollError::Cancelled),
            },
            None => Err(PollError::Cancelled),
        }
    }
}

impl Drop for JobHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct PollWorker {
    job_id: String,
    config: PollingConfig,
    probe: Arc<dyn StatusProbe>,
    cancel: CancellationToken,
    status: watch::Sender<JobStatus>,
}

impl PollWorker {
    /// Returns `None` when cancelled; dropping the outcome sender is what
    /// resolves the handle to [`PollError::Cancelled`].
    async fn run(self) -> Option<PollOutcome> {
        let started = Instant::now();
        let mut consecutive_failures: u32 = 0;

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    debug!(job_id = %self.job_id, "polling cancelled");
                    return None;
                }
                _ = sleep(self.config.interval) => {}
            }

            if started.elapsed() >= self.config.max_poll_duration {
                warn!(
                    job_id = %self.job_id,
                    deadline_secs = self.config.max_poll_duration.as_secs(),
                    "poll deadline exceeded"
                );
                return Some(Err(PollError::DeadlineExceeded {
                    job_id: self.job_id.clone(),
                    deadline: self.config.max_poll_duration,
                }));
            }

            let check = tokio::select! {
                _ = self.cancel.cancelled() => {
                    debug!(job_id = %self.job_id, "polling cancelled mid-check");
                    return None;
                }
                result = self.probe.check(&self.job_id) => result,
            };

            match check {
                Ok(state) => {
                    consecutive_failures = 0;
                    let _ = self.status.send(state.status);
                    if state.status.is_terminal() {
                        debug!(job_id = %self.job_id, status = ?state.status, "job reached terminal status");
                        return Some(Ok(terminal_result(state)));
                    }
                }
                Err(error) => {
                    consecutive_failures += 1;
                    warn!(
                        job_id = %self.job_id,
                        %error,
                        failures = consecutive_failures,
                        "status check failed"
                    );
                    if consecutive_failures >= self.config.max_transient_failures {
                        return Some(Err(PollError::RetriesExhausted {
                            job_id: self.job_id.clone(),
                            failures: consecutive_failures,
                        }));
                    }
                }
            }
        }
    }
}

/// Status endpoints attach a payload to every terminal report; tolerate a
/// probe that does not by synthesizing the obvious one.
fn terminal_result(state: JobState) -> JobResult {
    match state.result {
        Some(result) => result,
        None => match state.status {
            JobStatus::Failed => JobResult::Failed {
                message: "job failed without a reported reason".to_string(),
            },
            _ => JobResult::Completed {
                url: None,
                thumbnail_url: None,
            },
        },
    }
}
