//! Configuration for the print dispatcher.

use std::path::PathBuf;
use std::time::Duration;

/// Default printer display name — the one physical printer a deployment
/// owns.
pub const DEFAULT_PRINTER: &str = "ZDesigner GK420t";

/// Default pause between consecutive batch jobs. Keeps a burst of labels
/// from overrunning the printer's input buffer.
pub const DEFAULT_PACING: Duration = Duration::from_millis(200);

/// Complete dispatcher configuration.
///
/// Injected at construction; the dispatcher reads no ambient global state.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// External print-helper executable. Invoked once per job with the
    /// spool-file path and printer name as its two positional arguments.
    pub helper: PathBuf,
    /// Printer display name used when the caller does not override it.
    pub printer: String,
    /// Directory for spool files. Created when the dispatcher is built.
    pub spool_dir: PathBuf,
    /// Pause between consecutive jobs in a batch.
    pub pacing: Duration,
}

impl DispatchConfig {
    /// Configuration with defaults for everything but the helper path.
    pub fn new(helper: impl Into<PathBuf>) -> Self {
        Self {
            helper: helper.into(),
            printer: DEFAULT_PRINTER.to_string(),
            spool_dir: std::env::temp_dir().join("labelpress"),
            pacing: DEFAULT_PACING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_printer_spool_and_pacing() {
        let config = DispatchConfig::new("/usr/local/bin/print-helper");
        assert_eq!(config.printer, DEFAULT_PRINTER);
        assert_eq!(config.pacing, Duration::from_millis(200));
        assert!(config.spool_dir.ends_with("labelpress"));
    }
}
