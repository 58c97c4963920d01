//! Splitting formatted notes to fit the Mod Notes length limit
//!
//! Text that fits is sent as one note. Longer text is carved into the largest
//! prefixes that fit, cut at the last line break within the limit, else the
//! last whitespace, else at a hard character boundary. Separators stay at
//! the end of the chunk they close, so joining the chunks' `content` gives
//! back the original text byte for byte.
//!
//! The header is glued to the first chunk: candidates for the first cut are
//! only searched after the header's line break, so a header is never sent
//! on its own while body text could still fit beside it.
//!
//! Every chunk after the first is prefixed with `(cont. N) `, `N` being its
//! 1-based position. The marker counts against the limit.

use crate::error::SplitError;
use crate::format::{FormattedText, HEADER_DELIMITER};
use serde::{Deserialize, Serialize};

/// How text length is measured against the limit
pub trait LengthMetric {
    /// Width of a single character
    fn char_len(&self, c: char) -> usize;

    /// Width of a string; the sum of its characters' widths
    fn measure(&self, s: &str) -> usize {
        s.chars().map(|c| self.char_len(c)).sum()
    }
}

/// Built-in length metrics, selectable from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-16 code units, as counted by JavaScript front ends
    Utf16,
    /// UTF-8 bytes
    Bytes,
}

impl LengthMetric for LengthUnit {
    fn char_len(&self, c: char) -> usize {
        match self {
            LengthUnit::Chars => 1,
            LengthUnit::Utf16 => c.len_utf16(),
            LengthUnit::Bytes => c.len_utf8(),
        }
    }

    fn measure(&self, s: &str) -> usize {
        match self {
            LengthUnit::Chars => s.chars().count(),
            LengthUnit::Utf16 => s.encode_utf16().count(),
            LengthUnit::Bytes => s.len(),
        }
    }
}

/// One note-sized piece of a formatted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteChunk {
    /// 1-based position within the source note
    pub position: usize,
    /// Continuation marker; empty for the first chunk
    pub marker: String,
    /// Exact slice of the formatted text
    pub content: String,
}

impl NoteChunk {
    /// Text to submit: marker followed by content
    pub fn text(&self) -> String {
        format!("{}{}", self.marker, self.content)
    }

    pub fn is_continuation(&self) -> bool {
        self.position > 1
    }
}

/// Marker prepended to the chunk at `position`
pub fn continuation_marker(position: usize) -> String {
    if position <= 1 {
        String::new()
    } else {
        format!("(cont. {}) ", position)
    }
}

/// Concatenate the unmarked content of a note's chunks
pub fn join_chunks(chunks: &[NoteChunk]) -> String {
    chunks.iter().map(|c| c.content.as_str()).collect()
}

/// Split formatted text into chunks no longer than `max_len`
///
/// # Arguments
/// * `text` - Formatted note, header first
/// * `max_len` - Destination limit, measured with `metric`
/// * `metric` - Length measurement
///
/// # Returns
/// Chunks in ascending position, or why the note cannot be split safely
pub fn split_note(
    text: &FormattedText,
    max_len: usize,
    metric: &dyn LengthMetric,
) -> Result<Vec<NoteChunk>, SplitError> {
    let full = text.as_str();
    if metric.measure(full) <= max_len {
        return Ok(vec![NoteChunk {
            position: 1,
            marker: String::new(),
            content: full.to_string(),
        }]);
    }

    let header_width = metric.measure(text.header());
    if header_width > max_len {
        return Err(SplitError::UnsplittableHeader {
            header_len: header_width,
            max_len,
        });
    }

    let mut chunks = Vec::new();
    let mut rest = full;
    // Cuts must land strictly after this byte offset of `rest`
    let mut floor = text.header_len() + HEADER_DELIMITER.len_utf8();

    loop {
        let position = chunks.len() + 1;
        let marker = continuation_marker(position);
        let budget = max_len.saturating_sub(metric.measure(&marker));

        if metric.measure(rest) <= budget {
            chunks.push(NoteChunk {
                position,
                marker,
                content: rest.to_string(),
            });
            break;
        }

        let limit = fitting_prefix_len(rest, budget, metric);
        if limit == 0 {
            return Err(SplitError::NoRoomForContent { position, max_len });
        }

        let cut = find_cut(rest, floor, limit);
        chunks.push(NoteChunk {
            position,
            marker,
            content: rest[..cut].to_string(),
        });
        rest = &rest[cut..];
        floor = 0;
    }

    Ok(chunks)
}

/// Byte length of the longest prefix of `s` whose width fits in `budget`
fn fitting_prefix_len(s: &str, budget: usize, metric: &dyn LengthMetric) -> usize {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        width += metric.char_len(c);
        if width > budget {
            return i;
        }
    }
    s.len()
}

/// Pick the cut point in `s[..limit]`, strictly after `floor`
///
/// Line break, then whitespace, then `limit` itself.
fn find_cut(s: &str, floor: usize, limit: usize) -> usize {
    if floor >= limit {
        return limit;
    }
    let window = &s[floor..limit];

    if let Some(i) = window.rfind('\n') {
        return floor + i + 1;
    }
    if let Some((i, c)) = window.char_indices().rev().find(|(_, c)| is_word_break(*c)) {
        return floor + i + c.len_utf8();
    }
    limit
}

/// Whitespace other than the no-break spaces
fn is_word_break(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{a0}' | '\u{2007}' | '\u{202f}')
}
