use chrono::{DateTime, FixedOffset};

/// One note from the export, normalized for conversion
///
/// `category` is the display name of the note's SnooNotes type, unchecked.
/// Whether it maps to a Mod Notes label is decided later by
/// [`map_category`](crate::mapping::map_category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNote {
    /// 1-based position of the note in the export's `Notes` array
    pub entry: usize,
    /// SnooNotes note ID
    pub note_id: i64,
    /// Moderator who wrote the note
    pub author: String,
    /// User the note is about
    pub subject: String,
    /// Subreddit the note was written in
    pub subreddit: String,
    /// When the note was written, with the offset it was recorded in
    pub created_at: DateTime<FixedOffset>,
    pub category: String,
    /// Note text; empty when the note had no message
    pub body: String,
    /// Permalink of the post or comment the note was written about
    pub url: Option<String>,
}
