//! Labelpress core library.
//!
//! Pure building blocks of the badge-label pipeline: record normalization
//! and validation, the deterministic ZPL encoder for the fixed 5 cm ×
//! 2.5 cm label stock, printer control documents, and the HTTP wire types
//! shared by the print service and its client. No I/O happens here.

#![warn(missing_docs)]

/// HTTP wire types shared by the print service and client facade.
pub mod api;
/// Printer control documents (calibration, configuration, queue control).
pub mod control;
/// ZPL encoding for badge and manual free-text labels.
pub mod label;
/// Record normalization and validation.
pub mod record;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the common entry points; full module paths remain
// available.

pub use control::ControlCommand;
pub use label::{EncodedLabel, LABEL_HEIGHT_DOTS, LABEL_WIDTH_DOTS, encode_badge, encode_text};
pub use record::{RawRecord, Record, ValidationReport};
