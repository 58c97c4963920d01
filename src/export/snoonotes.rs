//! Raw SnooNotes backup types
//!
//! These mirror the JSON written by the SnooNotes "export" button. They are
//! only used while parsing; everything downstream works with
//! [`SourceNote`](super::SourceNote).

use serde::Deserialize;

/// Top level of a SnooNotes backup
#[derive(Debug, Deserialize)]
pub struct SnooNoteBackup {
    #[serde(rename = "NoteTypes")]
    pub note_types: Vec<serde_json::Value>,
    #[serde(rename = "Notes")]
    pub notes: Vec<serde_json::Value>,
}

/// A SnooNotes note type, as configured per subreddit
///
/// Only `NoteTypeID` and `DisplayName` matter for the import. The remaining
/// fields control how SnooNotes rendered the type and are accepted so a
/// full backup deserializes cleanly.
#[derive(Debug, Clone, Deserialize)]
pub struct SnooNoteType {
    #[serde(rename = "NoteTypeID")]
    pub note_type_id: i64,
    #[serde(rename = "SubName", default)]
    pub sub_name: Option<String>,
    #[serde(rename = "DisplayName")]
    pub display_name: String,
    #[serde(rename = "ColorCode", default)]
    pub color_code: Option<String>,
    #[serde(rename = "DisplayOrder", default)]
    pub display_order: Option<i64>,
    #[serde(rename = "Bold", default)]
    pub bold: bool,
    #[serde(rename = "Italic", default)]
    pub italic: bool,
    #[serde(rename = "IconString", default)]
    pub icon_string: Option<String>,
    #[serde(rename = "Disabled", default)]
    pub disabled: bool,
}

/// A single SnooNotes note
#[derive(Debug, Clone, Deserialize)]
pub struct SnooNote {
    #[serde(rename = "NoteID")]
    pub note_id: i64,
    #[serde(rename = "NoteTypeID")]
    pub note_type_id: i64,
    #[serde(rename = "SubName")]
    pub sub_name: String,
    /// Moderator who wrote the note
    #[serde(rename = "Submitter")]
    pub submitter: String,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    /// User the note is about
    #[serde(rename = "AppliesToUsername")]
    pub applies_to_username: String,
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
    /// RFC 3339 instant, e.g. `2022-09-24T18:46:14.15Z`
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "ParentSubreddit", default)]
    pub parent_subreddit: Option<String>,
}
