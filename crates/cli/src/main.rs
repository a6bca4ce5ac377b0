//! labelpress — encode, validate, and print Zebra badge labels.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use labelpress_core::{ControlCommand, RawRecord, Record, encode_badge, encode_text};
use labelpress_dispatch::{BatchReport, DispatchConfig, Dispatcher, JobOutcome};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "labelpress",
    version,
    about = "labelpress — encode, validate, and print Zebra badge labels"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    // ── Offline commands (no printer involved) ───────────────────────
    /// Encode a record file as ZPL and print it to stdout.
    Encode {
        /// JSON file with one record.
        record: PathBuf,
        /// Number of physical copies the label requests.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        copies: u32,
    },

    /// Encode a manual free-text label as ZPL and print it to stdout.
    Text {
        /// Label text, centered on the label.
        text: String,
        /// Number of physical copies the label requests.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        copies: u32,
    },

    /// Check a record file for missing required fields.
    Validate {
        /// JSON file with one record.
        record: PathBuf,
    },

    // ── Printing commands ────────────────────────────────────────────
    /// Encode a record and send it to the printer.
    Print {
        /// JSON file with one record.
        record: PathBuf,
        /// Number of physical copies the label requests.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        copies: u32,
        #[command(flatten)]
        dispatch: DispatchArgs,
        /// Emit the job outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Encode a record array and send the whole batch to the printer.
    Batch {
        /// JSON file with an array of records.
        records: PathBuf,
        /// Number of physical copies each label requests.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        copies: u32,
        #[command(flatten)]
        dispatch: DispatchArgs,
        /// Emit the batch report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Send a printer control document (calibration, configuration, …).
    Control {
        /// Which control operation to send.
        #[arg(value_enum)]
        command: ControlKind,
        #[command(flatten)]
        dispatch: DispatchArgs,
        /// Emit the job outcome as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch flags shared by every printing command.
#[derive(Args, Debug)]
struct DispatchArgs {
    /// Path to the print-helper executable.
    #[arg(long)]
    helper: PathBuf,

    /// Printer display name.
    #[arg(long, default_value = labelpress_dispatch::DEFAULT_PRINTER)]
    printer: String,

    /// Spool directory for temporary ZPL files.
    #[arg(long)]
    spool_dir: Option<PathBuf>,

    /// Pause between batch jobs, in milliseconds.
    #[arg(long, default_value_t = 200)]
    pacing_ms: u64,
}

impl DispatchArgs {
    fn dispatcher(&self) -> Result<Dispatcher> {
        let mut config = DispatchConfig::new(&self.helper);
        config.printer = self.printer.clone();
        config.pacing = Duration::from_millis(self.pacing_ms);
        if let Some(dir) = &self.spool_dir {
            config.spool_dir = dir.clone();
        }
        Dispatcher::new(config).context("failed to initialize dispatcher")
    }
}

/// Control operations selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControlKind {
    /// Calibrate the media sensors.
    Calibrate,
    /// Print the printer's configuration label.
    PrintConfig,
    /// Cancel all queued jobs.
    CancelAll,
    /// Print a fixed test label.
    TestLabel,
}

impl From<ControlKind> for ControlCommand {
    fn from(kind: ControlKind) -> Self {
        match kind {
            ControlKind::Calibrate => ControlCommand::Calibrate,
            ControlKind::PrintConfig => ControlCommand::PrintConfig,
            ControlKind::CancelAll => ControlCommand::CancelAll,
            ControlKind::TestLabel => ControlCommand::TestLabel,
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Encode { record, copies } => cmd_encode(&record, copies)?,
        Cmd::Text { text, copies } => cmd_text(&text, copies),
        Cmd::Validate { record } => cmd_validate(&record)?,
        Cmd::Print {
            record,
            copies,
            dispatch,
            json,
        } => cmd_print(&record, copies, &dispatch, json)?,
        Cmd::Batch {
            records,
            copies,
            dispatch,
            json,
        } => cmd_batch(&records, copies, &dispatch, json)?,
        Cmd::Control {
            command,
            dispatch,
            json,
        } => cmd_control(command, &dispatch, json)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_encode(path: &Path, copies: u32) -> Result<()> {
    let record = load_record(path)?;
    ensure_valid(&record)?;
    println!("{}", encode_badge(&record, copies).zpl);
    Ok(())
}

fn cmd_text(text: &str, copies: u32) {
    println!("{}", encode_text(text, copies).zpl);
}

fn cmd_validate(path: &Path) -> Result<()> {
    let record = load_record(path)?;
    let report = record.validate();
    if report.is_valid {
        println!("record is valid");
        return Ok(());
    }
    for error in &report.errors {
        println!("{error}");
    }
    process::exit(1);
}

fn cmd_print(path: &Path, copies: u32, dispatch: &DispatchArgs, json: bool) -> Result<()> {
    let record = load_record(path)?;
    ensure_valid(&record)?;
    let label = encode_badge(&record, copies);

    let dispatcher = dispatch.dispatcher()?;
    let outcome = dispatcher.dispatch(&label.zpl, &dispatch.printer);
    report_outcome(&outcome, json)
}

fn cmd_batch(path: &Path, copies: u32, dispatch: &DispatchArgs, json: bool) -> Result<()> {
    let records = load_records(path)?;

    // Surface every invalid record before any label is dispatched.
    let mut invalid = 0usize;
    for (index, record) in records.iter().enumerate() {
        let report = record.validate();
        if !report.is_valid {
            invalid += 1;
            for error in &report.errors {
                eprintln!("record {index}: {error}");
            }
        }
    }
    if invalid > 0 {
        anyhow::bail!("{invalid} record(s) missing required fields; nothing printed");
    }

    let payloads: Vec<String> = records
        .iter()
        .map(|record| encode_badge(record, copies).zpl)
        .collect();

    let dispatcher = dispatch.dispatcher()?;
    let report = dispatcher.dispatch_batch(&payloads, &dispatch.printer)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_batch_summary(&report);
    }
    if !report.all_succeeded() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_control(kind: ControlKind, dispatch: &DispatchArgs, json: bool) -> Result<()> {
    let command = ControlCommand::from(kind);
    let dispatcher = dispatch.dispatcher()?;
    let outcome = dispatcher.dispatch(command.zpl(), &dispatch.printer);
    report_outcome(&outcome, json)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn load_record(path: &Path) -> Result<Record> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read record file {}", path.display()))?;
    let raw: RawRecord = serde_json::from_str(&text)
        .with_context(|| format!("invalid record JSON in {}", path.display()))?;
    Ok(Record::normalize(&raw))
}

fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read records file {}", path.display()))?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text)
        .with_context(|| format!("invalid record array JSON in {}", path.display()))?;
    Ok(raw.iter().map(Record::normalize).collect())
}

fn ensure_valid(record: &Record) -> Result<()> {
    let report = record.validate();
    if report.is_valid {
        return Ok(());
    }
    for error in &report.errors {
        eprintln!("{error}");
    }
    anyhow::bail!("record is missing required fields")
}

fn report_outcome(outcome: &JobOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else if outcome.success {
        println!(
            "{}",
            outcome
                .message
                .as_deref()
                .unwrap_or("label sent to printer")
        );
    } else {
        eprintln!("{}", outcome.error.as_deref().unwrap_or("print failed"));
    }
    if !outcome.success {
        process::exit(1);
    }
    Ok(())
}

fn print_batch_summary(report: &BatchReport) {
    for result in &report.results {
        match &result.error {
            None => println!("label {}: ok", result.index),
            Some(error) => println!("label {}: failed: {error}", result.index),
        }
    }
    println!(
        "{} label(s): {} printed, {} failed",
        report.total, report.successful, report.failed
    );
}
