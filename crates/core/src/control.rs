//! Printer control documents: calibration, configuration printout, and
//! queue control. These are complete ZPL documents dispatched like any
//! other payload.

/// Calibrate the media sensors and save the result.
pub const CALIBRATE: &str = "~JC^XA^JUS^XZ";

/// Print the printer's own configuration label.
pub const PRINT_CONFIG: &str = "^XA^HH^XZ";

/// Cancel every queued print job.
pub const CANCEL_ALL: &str = "~JA";

/// Fixed test label for verifying the print path end to end.
pub const TEST_LABEL: &str = "^XA\n\
     ^PW400\n\
     ^LL200\n\
     ^FO50,50^A0N,30,30^FDTEST^FS\n\
     ^FO50,100^A0N,25,25^FDZEBRA GK420T^FS\n\
     ^XZ";

/// A printer control operation selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Media sensor calibration.
    Calibrate,
    /// Configuration printout.
    PrintConfig,
    /// Cancel all queued jobs.
    CancelAll,
    /// Test label.
    TestLabel,
}

impl ControlCommand {
    /// The ZPL document for this operation.
    pub fn zpl(self) -> &'static str {
        match self {
            ControlCommand::Calibrate => CALIBRATE,
            ControlCommand::PrintConfig => PRINT_CONFIG,
            ControlCommand::CancelAll => CANCEL_ALL,
            ControlCommand::TestLabel => TEST_LABEL,
        }
    }
}
