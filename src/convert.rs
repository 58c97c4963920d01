//! Conversion of parsed SnooNotes into Mod Notes payloads
//!
//! Each source note is mapped, formatted and split independently. A note
//! that cannot be converted becomes a failed [`ConversionResult`]; the run
//! carries on, and the report always has one entry per input note.

use crate::error::{ConversionError, ConversionErrorKind, MalformedExportError};
use crate::export::{SourceNote, parse_export};
use crate::format::format_note;
use crate::link::{Thing, resolve_thing};
use crate::mapping::{DestinationLabel, map_category};
use crate::split::{LengthUnit, NoteChunk, split_note};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Reddit's published Mod Notes length limit
pub const DEFAULT_MAX_NOTE_LENGTH: usize = 250;

/// Settings that shape conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Destination limit per note, measured with `length_unit`
    pub max_note_length: usize,
    pub length_unit: LengthUnit,
    /// Subreddit to import into instead of each note's own
    pub subreddit: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_note_length: DEFAULT_MAX_NOTE_LENGTH,
            length_unit: LengthUnit::default(),
            subreddit: None,
        }
    }
}

/// A source note ready to be created as one or more Mod Notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedNote {
    pub subreddit: String,
    pub label: DestinationLabel,
    /// Chunks in submission order
    pub chunks: Vec<NoteChunk>,
    /// Post or comment to attach the notes to
    pub thing: Option<Thing>,
}

/// Outcome of converting one source note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub note: SourceNote,
    pub outcome: Result<ConvertedNote, ConversionError>,
}

impl ConversionResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Payloads for this note, one per chunk, in submission order
    ///
    /// Empty when the note failed to convert.
    pub fn payloads(&self) -> Vec<NotePayload> {
        let Ok(converted) = &self.outcome else {
            return Vec::new();
        };
        let total = converted.chunks.len();
        converted
            .chunks
            .iter()
            .map(|chunk| NotePayload {
                entry: self.note.entry,
                note_id: self.note.note_id,
                subreddit: converted.subreddit.clone(),
                user: self.note.subject.clone(),
                label: converted.label,
                note: chunk.text(),
                thing: converted.thing.clone(),
                position: chunk.position,
                total,
            })
            .collect()
    }
}

/// One Mod Note creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePayload {
    /// 1-based position of the source note in the export
    pub entry: usize,
    /// SnooNotes note ID
    pub note_id: i64,
    pub subreddit: String,
    /// User the note is about
    pub user: String,
    pub label: DestinationLabel,
    /// Note text, continuation marker included
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing: Option<Thing>,
    /// 1-based chunk position within the source note
    pub position: usize,
    /// Number of chunks the source note was split into
    pub total: usize,
}

/// Result of converting a whole export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// One entry per source note, in source order
    pub results: Vec<ConversionResult>,
}

impl ConversionReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Every payload of every converted note, in submission order
    pub fn payloads(&self) -> Vec<NotePayload> {
        self.results.iter().flat_map(|r| r.payloads()).collect()
    }

    /// Notes that could not be converted
    pub fn failures(&self) -> impl Iterator<Item = &ConversionError> {
        self.results.iter().filter_map(|r| r.outcome.as_ref().err())
    }
}

/// Convert a single source note
pub fn convert_note(
    note: &SourceNote,
    options: &ConvertOptions,
) -> Result<ConvertedNote, ConversionError> {
    let fail = |kind: ConversionErrorKind| ConversionError {
        subject: note.subject.clone(),
        created_at: note.created_at,
        category: note.category.clone(),
        kind,
    };

    let label = map_category(&note.category).map_err(|e| fail(e.into()))?;
    let text = format_note(note);
    let chunks = split_note(&text, options.max_note_length, &options.length_unit)
        .map_err(|e| fail(e.into()))?;

    let thing = note.url.as_deref().and_then(resolve_thing);
    if thing.is_none()
        && let Some(url) = &note.url
    {
        debug!(entry = note.entry, url = %url, "Permalink not recognized; note will be unattached");
    }

    Ok(ConvertedNote {
        subreddit: options
            .subreddit
            .clone()
            .unwrap_or_else(|| note.subreddit.clone()),
        label,
        chunks,
        thing,
    })
}

/// Convert parsed notes, one result per note
pub fn convert_notes<I>(notes: I, options: &ConvertOptions) -> ConversionReport
where
    I: IntoIterator<Item = SourceNote>,
{
    let mut results = Vec::new();
    for note in notes {
        let outcome = convert_note(&note, options);
        match &outcome {
            Ok(converted) => debug!(
                entry = note.entry,
                subject = %note.subject,
                label = %converted.label,
                chunks = converted.chunks.len(),
                "Converted note"
            ),
            Err(e) => warn!(entry = note.entry, category = %note.category, "{}", e),
        }
        results.push(ConversionResult { note, outcome });
    }

    let report = ConversionReport { results };
    info!(
        notes = report.len(),
        converted = report.succeeded(),
        failed = report.failed(),
        "Conversion finished"
    );
    report
}

/// Parse an export and convert every note in it
///
/// A malformed export fails before any note is converted.
pub fn convert_export(
    content: &str,
    options: &ConvertOptions,
) -> Result<ConversionReport, MalformedExportError> {
    let notes = parse_export(content)?;
    Ok(convert_notes(notes, options))
}
