//! Error types for the SnooNotes importer
//!
//! Parsing failures are fatal to a run and are returned directly. Mapping and
//! splitting failures belong to a single record and end up inside that
//! record's [`ConversionResult`](crate::convert::ConversionResult).

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// The export file does not match the SnooNotes backup schema
///
/// `entry` is the 1-based position of the offending item within its array,
/// when the problem can be pinned to one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_malformed(.section, .entry, .reason))]
pub struct MalformedExportError {
    pub section: ExportSection,
    pub entry: Option<usize>,
    pub reason: String,
}

/// Which part of the export an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSection {
    Document,
    Notes,
    NoteTypes,
}

impl MalformedExportError {
    pub fn document(reason: impl Into<String>) -> Self {
        Self {
            section: ExportSection::Document,
            entry: None,
            reason: reason.into(),
        }
    }

    pub fn note(entry: usize, reason: impl Into<String>) -> Self {
        Self {
            section: ExportSection::Notes,
            entry: Some(entry),
            reason: reason.into(),
        }
    }

    pub fn note_type(entry: usize, reason: impl Into<String>) -> Self {
        Self {
            section: ExportSection::NoteTypes,
            entry: Some(entry),
            reason: reason.into(),
        }
    }
}

fn describe_malformed(section: &ExportSection, entry: &Option<usize>, reason: &str) -> String {
    match (section, entry) {
        (ExportSection::Notes, Some(n)) => format!("Malformed export: note entry {}: {}", n, reason),
        (ExportSection::NoteTypes, Some(n)) => {
            format!("Malformed export: note type entry {}: {}", n, reason)
        }
        _ => format!("Malformed export: {}", reason),
    }
}

/// A source category with no Mod Notes equivalent
///
/// Carries the category exactly as it appeared in the export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unmapped note type '{0}'")]
pub struct UnmappedTypeError(pub String);

/// Formatted text could not be divided into notes within the length limit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The provenance header alone does not fit in one note
    #[error("Note header is {header_len} long but the limit is {max_len}")]
    UnsplittableHeader { header_len: usize, max_len: usize },

    /// The continuation marker leaves no room for even one character
    #[error("Chunk {position} has no room for content within a limit of {max_len}")]
    NoRoomForContent { position: usize, max_len: usize },
}

/// Why a single record could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionErrorKind {
    #[error(transparent)]
    Unmapped(#[from] UnmappedTypeError),

    #[error(transparent)]
    Split(#[from] SplitError),
}

/// A per-record failure, with enough of the record to report it to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Note for /u/{subject} at {created_at}: {kind}")]
pub struct ConversionError {
    pub subject: String,
    pub created_at: DateTime<FixedOffset>,
    pub category: String,
    pub kind: ConversionErrorKind,
}

/// Configuration could not be loaded or is invalid
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
