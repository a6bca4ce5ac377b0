//! HTTP routes for the print service.
//!
//! Dispatch work is blocking (helper-process wait plus pacing sleeps), so
//! every print handler runs it on the blocking thread pool. The service
//! holds one dispatcher for its one configured printer; global
//! serialization of print requests is a deployment concern (one service
//! instance per printer).

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use labelpress_core::api::{
    BatchItem, BatchRequest, BatchResponse, ErrorResponse, HealthResponse, PrintRequest,
    PrintResponse, PrintersResponse,
};
use labelpress_dispatch::{BatchReport, Dispatcher, JobOutcome};

/// Shared service state: one dispatcher per instance.
pub struct AppState {
    /// Dispatcher bound to the configured printer.
    pub dispatcher: Dispatcher,
}

/// Build the service router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/print", post(print))
        .route("/api/print-batch", post(print_batch))
        .route("/api/printers", get(printers))
        .route("/api/health", get(health))
        .with_state(state)
}

// ── Handlers ────────────────────────────────────────────────────────────

async fn print(State(state): State<Arc<AppState>>, Json(req): Json<PrintRequest>) -> Response {
    if req.payload.trim().is_empty() {
        return bad_request("no ZPL payload provided");
    }

    let printer = req
        .printer_name
        .unwrap_or_else(|| state.dispatcher.default_printer().to_string());
    tracing::info!(printer, bytes = req.payload.len(), "print request");

    let payload = req.payload;
    let outcome = {
        let state = Arc::clone(&state);
        let printer = printer.clone();
        tokio::task::spawn_blocking(move || state.dispatcher.dispatch(&payload, &printer)).await
    };

    match outcome {
        Ok(outcome) => {
            let status = if outcome.success {
                StatusCode::OK
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(print_response(outcome))).into_response()
        }
        Err(err) => internal_error(&err),
    }
}

async fn print_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Response {
    if req.payloads.is_empty() {
        return bad_request("no ZPL payloads provided");
    }

    let printer = req
        .printer_name
        .unwrap_or_else(|| state.dispatcher.default_printer().to_string());
    tracing::info!(printer, labels = req.payloads.len(), "batch print request");

    let payloads = req.payloads;
    let report = {
        let state = Arc::clone(&state);
        let printer = printer.clone();
        tokio::task::spawn_blocking(move || state.dispatcher.dispatch_batch(&payloads, &printer))
            .await
    };

    match report {
        Ok(Ok(report)) => (StatusCode::OK, Json(batch_response(report))).into_response(),
        Ok(Err(err)) => bad_request(&err.to_string()),
        Err(err) => internal_error(&err),
    }
}

async fn printers(State(state): State<Arc<AppState>>) -> Json<PrintersResponse> {
    let printer = state.dispatcher.default_printer().to_string();
    Json(PrintersResponse {
        success: true,
        message: format!("configured printer: {printer}"),
        printers: vec![printer],
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "print service running".to_string(),
    })
}

// ── Response mapping ────────────────────────────────────────────────────

fn print_response(outcome: JobOutcome) -> PrintResponse {
    PrintResponse {
        success: outcome.success,
        message: outcome.message,
        error: outcome.error,
        exit_code: outcome.exit_code,
    }
}

fn batch_response(report: BatchReport) -> BatchResponse {
    BatchResponse {
        success: report.all_succeeded(),
        total: report.total,
        successful: report.successful,
        failed: report.failed,
        results: report
            .results
            .into_iter()
            .map(|r| BatchItem {
                index: r.index,
                success: r.success,
                error: r.error,
            })
            .collect(),
    }
}

fn bad_request(error: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(err: &tokio::task::JoinError) -> Response {
    tracing::error!(error = %err, "dispatch task failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "dispatch task failed".to_string(),
        }),
    )
        .into_response()
}
