//! Job and batch outcome types.

use serde::Serialize;

use crate::RunOutput;

/// Terminal outcome of a single print job.
///
/// A failed helper invocation and a non-zero helper exit are both
/// failures, distinguishable by `exit_code`: `None` means the helper
/// never started.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutcome {
    /// `true` when the helper exited with status 0.
    pub success: bool,
    /// Helper exit code. `None` when the helper never ran or was killed
    /// by a signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Diagnostic text captured from the helper on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure detail: spool write error, spawn error, or helper output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobOutcome {
    /// Outcome for a completed helper run, success or not.
    pub(crate) fn from_run(run: &RunOutput) -> Self {
        let stdout = String::from_utf8_lossy(&run.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&run.stderr).trim().to_string();

        if run.success() {
            let message = if stdout.is_empty() {
                "label sent to printer".to_string()
            } else {
                stdout
            };
            Self {
                success: true,
                exit_code: run.exit_code,
                message: Some(message),
                error: None,
            }
        } else {
            let detail = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                "could not reach the printer".to_string()
            };
            let code = run
                .exit_code
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            Self {
                success: false,
                exit_code: run.exit_code,
                message: None,
                error: Some(format!("print helper exited with {code}: {detail}")),
            }
        }
    }

    /// Outcome for a job whose spool file could not be written; the
    /// helper was never invoked.
    pub(crate) fn spool_failure(err: &std::io::Error) -> Self {
        Self {
            success: false,
            exit_code: None,
            message: None,
            error: Some(format!("failed to write spool file: {err}")),
        }
    }

    /// Outcome for a helper that could not be started.
    pub(crate) fn spawn_failure(helper: &std::path::Path, err: &std::io::Error) -> Self {
        Self {
            success: false,
            exit_code: None,
            message: None,
            error: Some(format!(
                "failed to start print helper {}: {err}",
                helper.display()
            )),
        }
    }
}

/// Per-document entry of a batch report. `index` is the document's
/// position in the input sequence.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    /// Position in the input sequence.
    pub index: usize,
    /// Whether this document was accepted.
    pub success: bool,
    /// Failure detail for this document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobResult {
    pub(crate) fn from_outcome(index: usize, outcome: &JobOutcome) -> Self {
        Self {
            index,
            success: outcome.success,
            error: outcome.error.clone(),
        }
    }
}

/// Aggregate accounting for a dispatched batch.
///
/// Invariants: `results.len() == total`, `successful + failed == total`,
/// and `results[i].index == i` for every `i`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Number of documents in the batch.
    pub total: usize,
    /// Documents the printer accepted.
    pub successful: usize,
    /// Documents that failed.
    pub failed: usize,
    /// Per-document outcomes in input order.
    pub results: Vec<JobResult>,
}

impl BatchReport {
    pub(crate) fn collect(results: Vec<JobResult>) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.success).count();
        Self {
            total,
            successful,
            failed: total - successful,
            results,
        }
    }

    /// `true` only when every job in the batch succeeded — the sole
    /// condition under which a caller should treat the batch as fully
    /// successful.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(code: Option<i32>, stdout: &str, stderr: &str) -> RunOutput {
        RunOutput {
            exit_code: code,
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn zero_exit_is_success_with_captured_stdout() {
        let outcome = JobOutcome::from_run(&run(Some(0), "spooled ok\n", ""));
        assert!(outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
        assert_eq!(outcome.message.as_deref(), Some("spooled ok"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn nonzero_exit_is_failure_preferring_stderr_detail() {
        let outcome = JobOutcome::from_run(&run(Some(2), "noise", "printer offline"));
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(2));
        let error = outcome.error.unwrap();
        assert!(error.contains("exited with 2"));
        assert!(error.contains("printer offline"));
    }

    #[test]
    fn spawn_failure_has_no_exit_code() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let outcome = JobOutcome::spawn_failure(std::path::Path::new("/bin/print-helper"), &err);
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, None);
        assert!(outcome.error.unwrap().contains("failed to start"));
    }

    #[test]
    fn report_accounting_matches_results() {
        let outcomes = [
            JobOutcome::from_run(&run(Some(0), "", "")),
            JobOutcome::from_run(&run(Some(1), "", "jam")),
            JobOutcome::from_run(&run(Some(0), "", "")),
        ];
        let results = outcomes
            .iter()
            .enumerate()
            .map(|(i, o)| JobResult::from_outcome(i, o))
            .collect();
        let report = BatchReport::collect(results);

        assert_eq!(report.total, 3);
        assert_eq!(report.successful, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.successful + report.failed, report.total);
        assert!(!report.all_succeeded());
        for (i, result) in report.results.iter().enumerate() {
            assert_eq!(result.index, i);
        }
    }

    #[test]
    fn outcome_serializes_camel_case() {
        let outcome = JobOutcome::from_run(&run(Some(3), "", "out of media"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["exitCode"], 3);
        assert!(json.get("message").is_none());
    }
}
