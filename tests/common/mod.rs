//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::DateTime;
use serde_json::{Value, json};
use snoonote_modnote::SourceNote;

/// Path of the sample backup shipped with the tests
pub const FIXTURE_PATH: &str = "tests/fixtures/snoonotes.json";

/// A note type entry with only the fields the importer needs
pub fn note_type_json(id: i64, display_name: &str) -> Value {
    json!({
        "NoteTypeID": id,
        "SubName": "Techman",
        "DisplayName": display_name,
    })
}

/// A complete note entry
pub fn note_json(id: i64, note_type_id: i64, subject: &str, message: &str, timestamp: &str) -> Value {
    json!({
        "NoteID": id,
        "NoteTypeID": note_type_id,
        "SubName": "Techman",
        "Submitter": "Techman-",
        "Message": message,
        "AppliesToUsername": subject,
        "Url": null,
        "Timestamp": timestamp,
        "ParentSubreddit": null,
    })
}

/// A backup document built from the given entries
pub fn export_json(note_types: Vec<Value>, notes: Vec<Value>) -> String {
    json!({ "NoteTypes": note_types, "Notes": notes }).to_string()
}

/// Backup with the default SnooNotes types and `count` well-formed notes
pub fn default_export(count: usize) -> (Vec<Value>, Vec<Value>) {
    let types = vec![
        note_type_json(1, "Abuse Warning"),
        note_type_json(2, "Ban"),
        note_type_json(3, "Good User"),
        note_type_json(4, "Shadow Ban"),
    ];
    let notes = (0..count)
        .map(|i| {
            note_json(
                i as i64 + 1,
                (i % 3) as i64 + 1,
                &format!("user{}", i),
                &format!("note number {}", i + 1),
                &format!("2022-09-{:02}T12:00:00Z", i % 28 + 1),
            )
        })
        .collect();
    (types, notes)
}

/// Create a source note with minimal fields
pub fn create_source_note(category: &str, author: &str, body: &str, created_at: &str) -> SourceNote {
    SourceNote {
        entry: 1,
        note_id: 1,
        author: author.to_string(),
        subject: "SomeUser".to_string(),
        subreddit: "Techman".to_string(),
        created_at: DateTime::parse_from_rfc3339(created_at).unwrap(),
        category: category.to_string(),
        body: body.to_string(),
        url: None,
    }
}
