//! Labelpress print dispatch — send ZPL documents to the printer through
//! the external print helper.
//!
//! One job = spool the document to a uniquely-named temporary file,
//! invoke the helper with the file path and printer name, capture its
//! exit status and output, remove the spool file, and report a
//! [`JobOutcome`]. Batches run the same job routine strictly in input
//! order with a fixed pacing pause between jobs; a failing job never
//! aborts the batch.
//!
//! The API is synchronous: the only blocking points are helper-process
//! termination and the inter-job pacing sleep.

mod config;
mod error;
mod outcome;
mod spool;

pub use config::{DEFAULT_PACING, DEFAULT_PRINTER, DispatchConfig};
pub use error::DispatchError;
pub use outcome::{BatchReport, JobOutcome, JobResult};

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

// ── Helper invocation seam ──────────────────────────────────────────────

/// Captured result of one helper invocation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Helper exit code; `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error.
    pub stderr: Vec<u8>,
}

impl RunOutput {
    /// `true` when the helper exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<std::process::Output> for RunOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Run the print helper to completion and capture its output.
///
/// The seam between the dispatcher and the operating system. Production
/// code uses [`HelperRunner`]; tests substitute scripted implementations.
pub trait CommandRunner: Send + Sync {
    /// Invoke `helper` with the spool path and printer name as its two
    /// positional arguments and block until it exits.
    fn run(&self, helper: &Path, spool: &Path, printer: &str) -> io::Result<RunOutput>;
}

/// Production runner over [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HelperRunner;

impl CommandRunner for HelperRunner {
    fn run(&self, helper: &Path, spool: &Path, printer: &str) -> io::Result<RunOutput> {
        Command::new(helper)
            .arg(spool)
            .arg(printer)
            .output()
            .map(RunOutput::from)
    }
}

// ── Dispatcher ──────────────────────────────────────────────────────────

/// Dispatches encoded labels to one physical printer.
///
/// The printer is a single serialized resource: callers are expected to
/// route all print requests for it through one dispatcher, one request
/// at a time. No retries happen at this layer — retry policy, if any,
/// belongs to the caller.
#[derive(Debug)]
pub struct Dispatcher<R: CommandRunner = HelperRunner> {
    config: DispatchConfig,
    runner: R,
    seq: AtomicU64,
}

impl Dispatcher<HelperRunner> {
    /// Build a dispatcher with the production helper runner, creating the
    /// spool directory if needed.
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        Self::with_runner(config, HelperRunner)
    }
}

impl<R: CommandRunner> Dispatcher<R> {
    /// Build a dispatcher with a custom [`CommandRunner`].
    pub fn with_runner(config: DispatchConfig, runner: R) -> Result<Self, DispatchError> {
        fs::create_dir_all(&config.spool_dir).map_err(|source| DispatchError::SpoolDir {
            path: config.spool_dir.clone(),
            source,
        })?;
        Ok(Self {
            config,
            runner,
            seq: AtomicU64::new(0),
        })
    }

    /// The configured default printer name.
    pub fn default_printer(&self) -> &str {
        &self.config.printer
    }

    /// Dispatch a single document to `printer`.
    ///
    /// This is the canonical path — identical to a batch of size one,
    /// minus the inter-job pacing.
    pub fn dispatch(&self, payload: &str, printer: &str) -> JobOutcome {
        self.run_job(payload, printer)
    }

    /// Dispatch an ordered batch of documents to `printer`.
    ///
    /// Documents are processed strictly in input order, one at a time,
    /// with [`DispatchConfig::pacing`] slept between consecutive jobs. A
    /// failing job does not stop the batch; every document is attempted
    /// and accounted for in the returned [`BatchReport`].
    pub fn dispatch_batch(
        &self,
        payloads: &[String],
        printer: &str,
    ) -> Result<BatchReport, DispatchError> {
        if payloads.is_empty() {
            return Err(DispatchError::EmptyBatch);
        }

        let mut results = Vec::with_capacity(payloads.len());
        for (index, payload) in payloads.iter().enumerate() {
            if index > 0 && !self.config.pacing.is_zero() {
                std::thread::sleep(self.config.pacing);
            }
            let outcome = self.run_job(payload, printer);
            results.push(JobResult::from_outcome(index, &outcome));
        }

        let report = BatchReport::collect(results);
        tracing::info!(
            total = report.total,
            successful = report.successful,
            failed = report.failed,
            printer,
            "batch dispatched"
        );
        Ok(report)
    }

    /// Run one job through spool → helper → cleanup → outcome.
    fn run_job(&self, payload: &str, printer: &str) -> JobOutcome {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);

        let spool = match spool::write_spool(&self.config.spool_dir, seq, payload) {
            Ok(file) => file,
            Err(err) => {
                tracing::error!(seq, error = %err, "spool write failed; helper not invoked");
                return JobOutcome::spool_failure(&err);
            }
        };
        tracing::debug!(
            seq,
            spool = %spool.path().display(),
            bytes = payload.len(),
            "label spooled"
        );

        let run = self.runner.run(&self.config.helper, spool.path(), printer);

        // The spool file is removed exactly once, whatever the helper did.
        // A failed removal is logged and must not change the job outcome.
        if let Err(err) = spool.close() {
            tracing::warn!(seq, error = %err, "failed to remove spool file");
        }

        match run {
            Ok(output) => {
                let outcome = JobOutcome::from_run(&output);
                if outcome.success {
                    tracing::info!(seq, printer, "label sent");
                } else {
                    tracing::error!(
                        seq,
                        printer,
                        exit_code = ?outcome.exit_code,
                        "helper rejected label"
                    );
                }
                outcome
            }
            Err(err) => {
                tracing::error!(
                    seq,
                    helper = %self.config.helper.display(),
                    error = %err,
                    "helper failed to start"
                );
                JobOutcome::spawn_failure(&self.config.helper, &err)
            }
        }
    }
}
