//! SnooNotes to Reddit Mod Notes importer
//!
//! This library converts a SnooNotes backup into payloads for Reddit's
//! native Mod Notes. SnooNotes is gone; its backups are the only record of
//! years of moderator history, so the conversion is strict about keeping
//! that history intact.
//!
//! # Architecture
//!
//! The pipeline runs in this order:
//! - **Parsing**: `export` - SnooNotes backup JSON into [`SourceNote`]s
//! - **Mapping**: `mapping` - SnooNotes note types onto Mod Notes labels
//! - **Formatting**: `format` - provenance header plus body
//! - **Splitting**: `split` - chunks that fit the Mod Notes length limit
//! - **Conversion**: `convert` - one [`ConversionResult`] per source note
//! - **Submission**: `submit` - ordered hand-off to a [`NoteSubmitter`]
//!
//! # Example
//!
//! ```no_run
//! use snoonote_modnote::{ConvertOptions, JsonLinesSubmitter, SubmitOptions};
//! use snoonote_modnote::{convert_export, submit_report};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let content = std::fs::read_to_string("snoonotes.json")?;
//!     let report = convert_export(&content, &ConvertOptions::default())?;
//!     let mut submitter = JsonLinesSubmitter::new(std::io::stdout());
//!     submit_report(&report, &mut submitter, &SubmitOptions::default()).await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod format;
pub mod link;
pub mod logging;
pub mod mapping;
pub mod split;
pub mod submit;

// Re-export commonly used types
pub use config::Config;
pub use convert::{
    ConversionReport, ConversionResult, ConvertOptions, ConvertedNote, NotePayload, convert_export,
    convert_note, convert_notes,
};
pub use error::{
    ConfigError, ConversionError, ConversionErrorKind, MalformedExportError, SplitError,
    UnmappedTypeError,
};
pub use export::{SourceNote, SourceNotes, parse_export};
pub use format::{FormattedText, format_note};
pub use link::{Thing, resolve_thing};
pub use mapping::{DestinationLabel, SourceCategory, map_category};
pub use split::{LengthMetric, LengthUnit, NoteChunk, join_chunks, split_note};
pub use submit::{
    FailurePolicy, JsonLinesSubmitter, NoteSubmitter, SubmissionSummary, SubmitOptions,
    submit_report,
};
