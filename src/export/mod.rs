//! SnooNotes export parsing
//!
//! This module turns a SnooNotes backup file into [`SourceNote`] records.
//! It is split into submodules:
//! - `snoonotes`: Raw serde types matching the backup JSON
//! - `source_note`: The normalized record handed to the conversion pipeline
//! - `parser`: Document validation and normalization
//! - `normalize`: Line ending and username cleanup

mod normalize;
mod parser;
mod snoonotes;
mod source_note;

pub use normalize::{normalize_line_endings, normalize_username};
pub use parser::{SourceNotes, parse_export};
pub use snoonotes::{SnooNote, SnooNoteBackup, SnooNoteType};
pub use source_note::SourceNote;
