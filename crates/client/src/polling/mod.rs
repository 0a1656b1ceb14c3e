//! Background status polling for long-running generation jobs
//!
//! Video, image, and avatar generation complete asynchronously server-side.
//! [`JobPoller`] owns the schedule: it spawns one worker per job that checks
//! a [`StatusProbe`] at a fixed interval until the job reaches a terminal
//! status, the failure budget runs out, the deadline passes, or the handle
//! is cancelled or dropped.

pub mod poller;

pub use poller::{JobHandle, JobPoller, PollError, PollOutcome, PollingConfig, StatusProbe};
