//! Rendering of source notes into Mod Notes text
//!
//! Every imported note starts with a provenance header so the original
//! author and date survive the move:
//!
//! ```text
//! [2022-09-20T23:58:10+00:00] [/u/Techman-]
//! Body text
//! ```

use crate::export::SourceNote;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;

/// Prefix Reddit renders as a user mention
pub const MENTION_SIGIL: &str = "/u/";

/// Separator between the header and the body
pub const HEADER_DELIMITER: char = '\n';

/// Canonical text of one source note
///
/// Keeps track of where the header ends so the splitter never breaks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    text: String,
    header_len: usize,
}

impl FormattedText {
    /// Build from a header line and a possibly empty body
    pub fn new(header: &str, body: &str) -> Self {
        let mut text = String::with_capacity(header.len() + 1 + body.len());
        text.push_str(header);
        if !body.is_empty() {
            text.push(HEADER_DELIMITER);
            text.push_str(body);
        }
        Self {
            text,
            header_len: header.len(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn header(&self) -> &str {
        &self.text[..self.header_len]
    }

    /// Byte length of the header line, excluding the delimiter
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render a timestamp with its offset, at seconds precision
///
/// UTC renders as `+00:00`, never `Z`.
pub fn format_timestamp(created_at: &DateTime<FixedOffset>) -> String {
    created_at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Header line for a note
pub fn format_header(created_at: &DateTime<FixedOffset>, author: &str) -> String {
    format!(
        "[{}] [{}{}]",
        format_timestamp(created_at),
        MENTION_SIGIL,
        author
    )
}

/// Render a source note into its canonical text
///
/// An empty body yields the header line alone.
pub fn format_note(note: &SourceNote) -> FormattedText {
    let header = format_header(&note.created_at, &note.author);
    FormattedText::new(&header, &note.body)
}
