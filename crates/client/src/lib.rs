//! HTTP client facade for the labelpress print service.
//!
//! The thin wrapper the UI layer calls. Print failures reported by the
//! service come back as per-record [`LabelResult`]s; a connection-level
//! failure surfaces as [`ClientError::Unavailable`], which callers show
//! as "print service unavailable" — a different condition than a label
//! that reached the service and failed to print.

use std::time::Duration;

use labelpress_core::api::{
    BatchRequest, BatchResponse, HealthResponse, PrintRequest, PrintResponse, PrintersResponse,
};

/// Default timeout for single-job requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Batches pace between jobs on the service side, so they get longer.
const BATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-side error taxonomy.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The print service could not be reached at all.
    #[error("print service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with an unexpected status and no parseable
    /// body.
    #[error("print service returned HTTP {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Status line or body excerpt.
        message: String,
    },

    /// Transport-level failure other than connect/timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body did not match the wire contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Per-record outcome as presented to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelResult {
    /// Whether this label was printed.
    pub success: bool,
    /// Success text or failure detail.
    pub message: String,
}

/// Facade over the print service's HTTP API.
pub struct PrintClient {
    http: reqwest::Client,
    base_url: String,
}

impl PrintClient {
    /// Build a client for the service at `base_url`
    /// (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `true` when the service answers its health probe.
    pub async fn health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self
            .http
            .get(&url)
            .timeout(Duration::from_secs(3))
            .send()
            .await
        {
            Ok(resp) => resp
                .json::<HealthResponse>()
                .await
                .map(|h| h.success)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// The configured printer names; the first entry is the default.
    pub async fn printers(&self) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/api/printers", self.base_url);
        let resp = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(classify)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: status.to_string(),
            });
        }
        let body: PrintersResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.printers)
    }

    /// Print one ZPL document.
    ///
    /// A label the service accepted or rejected comes back as a
    /// [`LabelResult`]; only transport and contract problems are errors.
    pub async fn print(
        &self,
        payload: &str,
        printer: Option<&str>,
    ) -> Result<LabelResult, ClientError> {
        let url = format!("{}/api/print", self.base_url);
        let req = PrintRequest {
            payload: payload.to_string(),
            printer_name: printer.map(str::to_string),
        };
        let resp = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&req)
            .send()
            .await
            .map_err(classify)?;
        let status = resp.status();

        match resp.json::<PrintResponse>().await {
            Ok(body) => Ok(LabelResult {
                success: body.success,
                message: body
                    .message
                    .or(body.error)
                    .unwrap_or_else(|| format!("HTTP {status}")),
            }),
            Err(_) if !status.is_success() => Err(ClientError::Server {
                status: status.as_u16(),
                message: status.to_string(),
            }),
            Err(e) => Err(ClientError::Decode(e.to_string())),
        }
    }

    /// Print a batch of ZPL documents, returning one [`LabelResult`] per
    /// payload in input order — even when the batch as a whole was
    /// refused, so callers can always count per-record successes.
    pub async fn print_batch(
        &self,
        payloads: Vec<String>,
        printer: Option<&str>,
    ) -> Result<Vec<LabelResult>, ClientError> {
        let expected = payloads.len();
        let url = format!("{}/api/print-batch", self.base_url);
        let req = BatchRequest {
            payloads,
            printer_name: printer.map(str::to_string),
        };
        let resp = self
            .http
            .post(&url)
            .timeout(BATCH_TIMEOUT)
            .json(&req)
            .send()
            .await
            .map_err(classify)?;
        let status = resp.status();

        match resp.json::<BatchResponse>().await {
            Ok(body) => Ok(map_batch(body, expected)),
            Err(_) if !status.is_success() => Err(ClientError::Server {
                status: status.as_u16(),
                message: status.to_string(),
            }),
            Err(e) => Err(ClientError::Decode(e.to_string())),
        }
    }
}

/// Sort transport failures: connect/timeout means the service is down.
fn classify(err: reqwest::Error) -> ClientError {
    if err.is_connect() || err.is_timeout() {
        ClientError::Unavailable(err.to_string())
    } else {
        ClientError::Network(err)
    }
}

/// Map a batch response into one result per submitted payload.
///
/// When the service refused the batch outright (`results` shorter than
/// the submission), the missing entries are reported as failures so the
/// caller's accounting still covers every record.
fn map_batch(body: BatchResponse, expected: usize) -> Vec<LabelResult> {
    let mut results: Vec<LabelResult> = body
        .results
        .iter()
        .map(|item| LabelResult {
            success: item.success,
            message: if item.success {
                "label printed".to_string()
            } else {
                item.error
                    .clone()
                    .unwrap_or_else(|| "print failed".to_string())
            },
        })
        .collect();

    while results.len() < expected {
        results.push(LabelResult {
            success: false,
            message: "batch refused by print service".to_string(),
        });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelpress_core::api::BatchItem;

    fn batch_body(items: Vec<BatchItem>) -> BatchResponse {
        let total = items.len();
        let successful = items.iter().filter(|i| i.success).count();
        BatchResponse {
            success: successful == total,
            total,
            successful,
            failed: total - successful,
            results: items,
        }
    }

    #[test]
    fn map_batch_preserves_order_and_counts() {
        let body = batch_body(vec![
            BatchItem {
                index: 0,
                success: true,
                error: None,
            },
            BatchItem {
                index: 1,
                success: false,
                error: Some("exit code 2".into()),
            },
            BatchItem {
                index: 2,
                success: true,
                error: None,
            },
        ]);
        let results = map_batch(body, 3);

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[2].success);
        assert_eq!(results[1].message, "exit code 2");
        assert_eq!(results.iter().filter(|r| r.success).count(), 2);
    }

    #[test]
    fn map_batch_pads_a_refused_batch_to_full_length() {
        let body = batch_body(vec![]);
        let results = map_batch(body, 4);

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.success));
    }

    #[test]
    fn batch_response_parses_from_service_json() {
        let body: BatchResponse = serde_json::from_str(
            r#"{
                "success": false,
                "total": 2,
                "successful": 1,
                "failed": 1,
                "results": [
                    {"index": 0, "success": true},
                    {"index": 1, "success": false, "error": "exit code 1"}
                ]
            }"#,
        )
        .unwrap();
        let results = map_batch(body, 2);
        assert!(results[0].success);
        assert!(!results[1].success);
    }
}
