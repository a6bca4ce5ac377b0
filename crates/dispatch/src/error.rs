//! Typed errors for the dispatch layer.
//!
//! Per-job failures are not errors here: they are captured in
//! [`JobOutcome`](crate::JobOutcome) and the batch continues. A
//! `DispatchError` means the work could not begin at all.

use std::io;
use std::path::PathBuf;

/// Batch-level failure conditions.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A batch must contain at least one document.
    #[error("empty batch: no documents to print")]
    EmptyBatch,

    /// The spool directory could not be created.
    #[error("cannot create spool directory {}", path.display())]
    SpoolDir {
        /// The directory that was attempted.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}
