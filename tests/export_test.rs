//! Tests for parsing SnooNotes backups

mod common;

use chrono::DateTime;
use common::{FIXTURE_PATH, default_export, export_json, note_json, note_type_json};
use snoonote_modnote::error::ExportSection;
use snoonote_modnote::{MalformedExportError, parse_export};

#[test]
fn test_parse_fixture() {
    let content = std::fs::read_to_string(FIXTURE_PATH).unwrap();
    let notes: Vec<_> = parse_export(&content).unwrap().collect();

    // Only one note should have been parsed
    assert_eq!(notes.len(), 1);

    let note = &notes[0];
    assert_eq!(note.entry, 1);
    assert_eq!(note.note_id, 1);
    assert_eq!(note.subreddit, "Techman");
    assert_eq!(note.author, "Techman-");
    assert_eq!(note.subject, "Techman-");
    assert_eq!(note.body, "Test message");
    assert_eq!(note.category, "Good User");
    assert_eq!(
        note.url.as_deref(),
        Some("https://www.reddit.com/r/Techman/comments/quln8b/hello_world/")
    );
    assert_eq!(
        note.created_at,
        DateTime::parse_from_rfc3339("2022-09-24T18:46:14.15Z").unwrap()
    );
}

#[test]
fn test_missing_field_reports_entry() {
    let (types, mut notes) = default_export(10);
    notes[2].as_object_mut().unwrap().remove("Submitter");
    let content = export_json(types, notes);

    let err = parse_export(&content).unwrap_err();
    assert_eq!(err.section, ExportSection::Notes);
    assert_eq!(err.entry, Some(3));
    assert!(err.reason.contains("Submitter"), "reason: {}", err.reason);
    assert!(err.to_string().contains("note entry 3"));
}

#[test]
fn test_wrong_container_shape() {
    let err = parse_export(r#"[{"NoteID": 1}]"#).unwrap_err();
    assert_eq!(err.section, ExportSection::Document);
    assert_eq!(err.entry, None);

    assert!(parse_export(r#"{"Notes": []}"#).is_err());
    assert!(parse_export("not json").is_err());
}

#[test]
fn test_unparseable_timestamp() {
    let content = export_json(
        vec![note_type_json(1, "Ban")],
        vec![
            note_json(1, 1, "alice", "ok", "2022-09-20T23:58:10Z"),
            note_json(2, 1, "bob", "no offset", "2022-09-20T23:58:10"),
        ],
    );
    let err = parse_export(&content).unwrap_err();
    assert_eq!(err.entry, Some(2));
    assert!(err.reason.contains("Timestamp"));
}

#[test]
fn test_undefined_note_type() {
    let content = export_json(
        vec![note_type_json(1, "Ban")],
        vec![note_json(1, 99, "alice", "text", "2022-09-20T23:58:10Z")],
    );
    let err = parse_export(&content).unwrap_err();
    assert_eq!(
        err,
        MalformedExportError::note(1, "NoteTypeID 99 is not defined in NoteTypes")
    );
}

#[test]
fn test_malformed_note_type_entry() {
    let content = export_json(
        vec![note_type_json(1, "Ban"), serde_json::json!({"NoteTypeID": 2})],
        vec![],
    );
    let err = parse_export(&content).unwrap_err();
    assert_eq!(err.section, ExportSection::NoteTypes);
    assert_eq!(err.entry, Some(2));
}

#[test]
fn test_unknown_category_is_not_a_parse_error() {
    let content = export_json(
        vec![note_type_json(1, "Something Custom")],
        vec![note_json(1, 1, "alice", "text", "2022-09-20T23:58:10Z")],
    );
    let notes: Vec<_> = parse_export(&content).unwrap().collect();
    assert_eq!(notes[0].category, "Something Custom");
}

#[test]
fn test_null_message_and_line_endings() {
    let mut empty = note_json(1, 1, "alice", "", "2022-09-20T23:58:10Z");
    empty["Message"] = serde_json::Value::Null;
    let crlf = note_json(2, 1, "bob", "line one\r\nline two\rline three", "2022-09-21T00:00:00Z");
    let content = export_json(vec![note_type_json(1, "Ban")], vec![empty, crlf]);

    let notes: Vec<_> = parse_export(&content).unwrap().collect();
    assert_eq!(notes[0].body, "");
    assert_eq!(notes[1].body, "line one\nline two\nline three");
}

#[test]
fn test_source_order_kept_when_timestamps_regress() {
    let content = export_json(
        vec![note_type_json(1, "Ban")],
        vec![
            note_json(1, 1, "alice", "later", "2022-09-21T00:00:00Z"),
            note_json(2, 1, "alice", "earlier", "2022-09-20T00:00:00Z"),
        ],
    );
    let bodies: Vec<_> = parse_export(&content).unwrap().map(|n| n.body).collect();
    assert_eq!(bodies, vec!["later", "earlier"]);
}

#[test]
fn test_iterator_is_exact_size() {
    let (types, notes) = default_export(10);
    let content = export_json(types, notes);
    let mut notes = parse_export(&content).unwrap();
    assert_eq!(notes.len(), 10);
    notes.next();
    assert_eq!(notes.len(), 9);
    assert_eq!(notes.last().map(|n| n.entry), Some(10));
}
