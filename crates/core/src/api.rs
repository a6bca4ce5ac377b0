//! HTTP wire types shared by the print service and its client facade.
//!
//! Field names are camelCase on the wire, matching what the dashboard UI
//! sends and expects.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/print`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    /// Complete ZPL document to print.
    pub payload: String,
    /// Printer display name. The service's configured printer is used
    /// when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
}

/// Response body for `POST /api/print`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintResponse {
    /// `true` when the helper accepted the job.
    pub success: bool,
    /// Informational text on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Helper exit code, when the helper ran at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

/// Request body for `POST /api/print-batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    /// Ordered ZPL documents, one per label.
    pub payloads: Vec<String>,
    /// Printer display name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
}

/// Per-document entry of a batch response. `index` refers to the position
/// of the document in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    /// Position in the request's `payloads`.
    pub index: usize,
    /// Whether this document was accepted.
    pub success: bool,
    /// Failure detail for this document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response body for `POST /api/print-batch`.
///
/// `results.len()` always equals the request's `payloads.len()`, in the
/// same order; `success` is `true` only when `failed == 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    /// `failed == 0`.
    pub success: bool,
    /// Number of documents in the batch.
    pub total: usize,
    /// Documents the printer accepted.
    pub successful: usize,
    /// Documents that failed.
    pub failed: usize,
    /// Per-document outcomes in request order.
    pub results: Vec<BatchItem>,
}

/// Response body for `GET /api/printers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintersResponse {
    /// Always `true`; the printer list is statically configured.
    pub success: bool,
    /// Available printer names; the first entry is the default.
    pub printers: Vec<String>,
    /// Informational text.
    pub message: String,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `true` when the service is up.
    pub success: bool,
    /// Informational text.
    pub message: String,
}

/// Error body for rejected requests (HTTP 400).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// What was wrong with the request.
    pub error: String,
}
