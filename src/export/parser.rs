//! SnooNotes backup parser
//!
//! The whole document is validated before any note is handed out, so a
//! malformed entry anywhere in the file fails the run before a single
//! conversion happens.

use super::normalize::{normalize_line_endings, normalize_username};
use super::snoonotes::{SnooNote, SnooNoteBackup, SnooNoteType};
use super::source_note::SourceNote;
use crate::error::MalformedExportError;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Notes parsed from an export, in source order
///
/// Consuming; once drained it cannot be restarted.
#[derive(Debug)]
pub struct SourceNotes {
    inner: std::vec::IntoIter<SourceNote>,
}

impl Iterator for SourceNotes {
    type Item = SourceNote;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SourceNotes {}

/// Parse the contents of a SnooNotes backup file
///
/// # Arguments
/// * `content` - Raw JSON text of the backup
///
/// # Returns
/// The notes in source order, or the first structural problem found
pub fn parse_export(content: &str) -> Result<SourceNotes, MalformedExportError> {
    let backup: SnooNoteBackup = serde_json::from_str(content).map_err(|e| {
        MalformedExportError::document(format!(
            "expected an object with 'NoteTypes' and 'Notes' arrays: {}",
            e
        ))
    })?;

    let type_names = parse_note_types(backup.note_types)?;

    let mut notes = Vec::with_capacity(backup.notes.len());
    let mut last_seen: HashMap<String, DateTime<FixedOffset>> = HashMap::new();

    for (index, value) in backup.notes.into_iter().enumerate() {
        let entry = index + 1;
        let raw: SnooNote = serde_json::from_value(value)
            .map_err(|e| MalformedExportError::note(entry, e.to_string()))?;
        let note = normalize_note(entry, raw, &type_names)?;

        let subject_key = note.subject.to_lowercase();
        if let Some(previous) = last_seen.get(&subject_key)
            && note.created_at < *previous
        {
            warn!(
                entry,
                subject = %note.subject,
                created_at = %note.created_at,
                previous = %previous,
                "Note is older than the previous note for this user; keeping source order"
            );
        }
        last_seen.insert(subject_key, note.created_at);

        notes.push(note);
    }

    debug!(notes = notes.len(), note_types = type_names.len(), "Parsed export");
    Ok(SourceNotes {
        inner: notes.into_iter(),
    })
}

/// Build the NoteTypeID -> DisplayName table
fn parse_note_types(
    values: Vec<serde_json::Value>,
) -> Result<HashMap<i64, String>, MalformedExportError> {
    let mut names = HashMap::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let entry = index + 1;
        let note_type: SnooNoteType = serde_json::from_value(value)
            .map_err(|e| MalformedExportError::note_type(entry, e.to_string()))?;
        if names
            .insert(note_type.note_type_id, note_type.display_name)
            .is_some()
        {
            return Err(MalformedExportError::note_type(
                entry,
                format!("duplicate NoteTypeID {}", note_type.note_type_id),
            ));
        }
    }
    Ok(names)
}

fn normalize_note(
    entry: usize,
    raw: SnooNote,
    type_names: &HashMap<i64, String>,
) -> Result<SourceNote, MalformedExportError> {
    let created_at = parse_timestamp(&raw.timestamp)
        .map_err(|reason| MalformedExportError::note(entry, reason))?;

    let category = type_names.get(&raw.note_type_id).cloned().ok_or_else(|| {
        MalformedExportError::note(
            entry,
            format!("NoteTypeID {} is not defined in NoteTypes", raw.note_type_id),
        )
    })?;

    let author = normalize_username(&raw.submitter);
    if author.is_empty() {
        return Err(MalformedExportError::note(entry, "empty Submitter"));
    }
    let subject = normalize_username(&raw.applies_to_username);
    if subject.is_empty() {
        return Err(MalformedExportError::note(entry, "empty AppliesToUsername"));
    }

    Ok(SourceNote {
        entry,
        note_id: raw.note_id,
        author,
        subject,
        subreddit: raw.sub_name.trim().to_string(),
        created_at,
        category,
        body: raw
            .message
            .as_deref()
            .map(normalize_line_endings)
            .unwrap_or_default(),
        url: raw
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty()),
    })
}

/// Parse an export timestamp, requiring an explicit offset
fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| format!("invalid Timestamp '{}': {}", s, e))
}
