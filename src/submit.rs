//! Submission of converted notes
//!
//! Creating a Mod Note is somebody else's job: anything implementing
//! [`NoteSubmitter`] can receive payloads. [`submit_report`] walks a
//! conversion report in source order and sends each note's chunks one at a
//! time, so chunks of a note always arrive in order.

use crate::convert::{ConversionReport, NotePayload};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info, warn};

/// Receives Mod Note payloads one at a time
#[allow(async_fn_in_trait)]
pub trait NoteSubmitter {
    /// Create a single Mod Note
    async fn submit(&mut self, payload: &NotePayload) -> Result<()>;
}

/// Writes each payload as one line of JSON
///
/// Used for dry runs and for handing payloads to a separate uploader.
pub struct JsonLinesSubmitter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSubmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of payloads written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> NoteSubmitter for JsonLinesSubmitter<W> {
    async fn submit(&mut self, payload: &NotePayload) -> Result<()> {
        serde_json::to_writer(&mut self.writer, payload)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

/// What to do after a note fails to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Move on to the next note
    #[default]
    Continue,
    /// Stop submitting altogether
    Stop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    pub policy: FailurePolicy,
    /// Skip source notes before this 1-based entry
    pub resume_from: Option<usize>,
    /// Within the `resume_from` note, skip chunks before this 1-based position
    pub resume_chunk: Option<usize>,
}

impl SubmitOptions {
    /// Build options from command-line positions
    pub fn from_positions(
        policy: FailurePolicy,
        resume_from: Option<u64>,
        resume_chunk: Option<u64>,
    ) -> Result<Self> {
        let to_usize = |n: u64, what: &str| {
            usize::try_from(n).with_context(|| format!("{} {} is too large", what, n))
        };
        Ok(Self {
            policy,
            resume_from: resume_from.map(|n| to_usize(n, "resume-from")).transpose()?,
            resume_chunk: resume_chunk.map(|n| to_usize(n, "resume-chunk")).transpose()?,
        })
    }
}

/// A note whose submission failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub entry: usize,
    /// Chunk that failed; earlier chunks of the note were created
    pub position: usize,
    pub error: String,
}

/// What happened while submitting a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub notes_submitted: usize,
    pub chunks_submitted: usize,
    /// Converted notes skipped because they precede the resume point
    pub notes_skipped: usize,
    pub failures: Vec<SubmissionFailure>,
    /// Last entry whose chunks were all submitted; resume after it
    pub last_completed_entry: Option<usize>,
    /// Submission ended early under [`FailurePolicy::Stop`]
    pub stopped: bool,
}

/// Submit every converted note in a report
///
/// Notes that failed conversion have no payloads and are passed over.
/// When a chunk fails, the rest of that note's chunks are not sent.
pub async fn submit_report<S: NoteSubmitter>(
    report: &ConversionReport,
    submitter: &mut S,
    options: &SubmitOptions,
) -> SubmissionSummary {
    let mut summary = SubmissionSummary::default();
    let resume_from = options.resume_from.unwrap_or(0);

    for result in report.results.iter().filter(|r| r.is_ok()) {
        let entry = result.note.entry;
        if entry < resume_from {
            summary.notes_skipped += 1;
            continue;
        }

        let mut payloads = result.payloads();
        if entry == resume_from
            && let Some(first) = options.resume_chunk
        {
            payloads.retain(|p| p.position >= first);
        }
        let outcome = submit_note(&payloads, submitter, &mut summary).await;
        match outcome {
            Ok(()) => {
                summary.notes_submitted += 1;
                summary.last_completed_entry = Some(entry);
                debug!(entry, "Submitted note");
            }
            Err(failure) => {
                warn!(
                    entry,
                    position = failure.position,
                    error = %failure.error,
                    "Failed to submit note"
                );
                summary.failures.push(failure);
                if options.policy == FailurePolicy::Stop {
                    summary.stopped = true;
                    break;
                }
            }
        }
    }

    info!(
        notes = summary.notes_submitted,
        chunks = summary.chunks_submitted,
        skipped = summary.notes_skipped,
        failed = summary.failures.len(),
        "Submission finished"
    );
    summary
}

async fn submit_note<S: NoteSubmitter>(
    payloads: &[NotePayload],
    submitter: &mut S,
    summary: &mut SubmissionSummary,
) -> std::result::Result<(), SubmissionFailure> {
    for payload in payloads {
        if let Err(e) = submitter.submit(payload).await {
            return Err(SubmissionFailure {
                entry: payload.entry,
                position: payload.position,
                error: format!("{:#}", e),
            });
        }
        summary.chunks_submitted += 1;
    }
    Ok(())
}
