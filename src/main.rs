//! SnooNotes importer - Main Entry Point
//!
//! Converts a SnooNotes backup and writes one Mod Note payload per line.
//! The actual implementation is in the `snoonote_modnote` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use snoonote_modnote::logging::init_logging;
use snoonote_modnote::{
    Config, FailurePolicy, JsonLinesSubmitter, SubmitOptions, convert_export, submit_report,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// Import a SnooNotes backup into Reddit Mod Notes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SnooNotes backup (JSON)
    export: PathBuf,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write payloads to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Skip notes before this 1-based entry of the backup
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    resume_from: Option<u64>,

    /// Within the --resume-from note, skip chunks before this 1-based position
    #[arg(long, requires = "resume_from", value_parser = clap::value_parser!(u64).range(1..))]
    resume_chunk: Option<u64>,

    /// Stop at the first note that fails to submit
    #[arg(long)]
    stop_on_error: bool,

    /// Override the Mod Notes length limit
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_note_length: Option<u64>,

    /// Log every converted note
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(max) = args.max_note_length {
        config.max_note_length = usize::try_from(max).context("max-note-length is too large")?;
    }
    if args.stop_on_error {
        config.failure_policy = FailurePolicy::Stop;
    }
    config.validate()?;

    let content = fs::read_to_string(&args.export)
        .with_context(|| format!("Failed to read export '{}'", args.export.display()))?;
    let report = convert_export(&content, &config.convert_options())?;

    for failure in report.failures() {
        error!("{}", failure);
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output '{}'", path.display())
        })?)),
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    let mut submitter = JsonLinesSubmitter::new(writer);
    let options =
        SubmitOptions::from_positions(config.failure_policy, args.resume_from, args.resume_chunk)?;
    let summary = submit_report(&report, &mut submitter, &options).await;
    submitter.into_inner()?;

    info!(
        notes = report.len(),
        unconverted = report.failed(),
        submitted = summary.notes_submitted,
        chunks = summary.chunks_submitted,
        "Import finished"
    );
    if summary.stopped
        && let Some(failure) = summary.failures.last()
    {
        error!(
            "Stopped at entry {} chunk {}; rerun with --resume-from {} --resume-chunk {} once the error is fixed",
            failure.entry, failure.position, failure.entry, failure.position
        );
    }

    if report.failed() > 0 || !summary.failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
