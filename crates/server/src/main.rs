//! labelpressd — HTTP print service for Zebra badge labels.
//!
//! Exposes the dispatch endpoints the dashboard UI talks to:
//! `POST /api/print`, `POST /api/print-batch`, `GET /api/printers`, and
//! `GET /api/health`. One service instance owns one printer.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use labelpress_dispatch::{DispatchConfig, Dispatcher};
use labelpress_server::routes::{self, AppState};

#[derive(Parser, Debug)]
#[command(
    name = "labelpressd",
    version,
    about = "HTTP print service for Zebra badge labels"
)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Path to the print-helper executable.
    #[arg(long)]
    helper: PathBuf,

    /// Printer display name.
    #[arg(long, default_value = labelpress_dispatch::DEFAULT_PRINTER)]
    printer: String,

    /// Spool directory for temporary ZPL files. Defaults to a
    /// `labelpress` directory under the system temp dir.
    #[arg(long)]
    spool_dir: Option<PathBuf>,

    /// Pause between batch jobs, in milliseconds.
    #[arg(long, default_value_t = 200)]
    pacing_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = DispatchConfig::new(args.helper);
    config.printer = args.printer;
    config.pacing = Duration::from_millis(args.pacing_ms);
    if let Some(dir) = args.spool_dir {
        config.spool_dir = dir;
    }

    let dispatcher = Dispatcher::new(config).context("failed to initialize dispatcher")?;
    let state = Arc::new(AppState { dispatcher });

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(addr = %args.bind, printer = state.dispatcher.default_printer(), "print service listening");

    axum::serve(listener, routes::app(state))
        .await
        .context("server error")?;

    Ok(())
}
