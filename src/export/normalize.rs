//! Text normalization applied to note fields while parsing

/// Normalize line endings in a string to LF (\n)
///
/// SnooNotes stored messages as typed into a browser textarea, so exports
/// from Windows users carry CRLF and occasionally bare CR.
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize a Reddit username taken from the export
///
/// Strips surrounding whitespace and a leading `/u/` or `u/` that some
/// moderators typed into the submitter field by hand.
pub fn normalize_username(name: &str) -> String {
    let trimmed = name.trim();
    let stripped = trimmed
        .strip_prefix("/u/")
        .or_else(|| trimmed.strip_prefix("u/"))
        .unwrap_or(trimmed);
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("hello\r\nworld"), "hello\nworld");
        assert_eq!(normalize_line_endings("hello\rworld"), "hello\nworld");
        assert_eq!(normalize_line_endings("hello\nworld"), "hello\nworld");
        assert_eq!(
            normalize_line_endings("line1\r\nline2\rline3\nline4"),
            "line1\nline2\nline3\nline4"
        );
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("Techman-"), "Techman-");
        assert_eq!(normalize_username("  Techman- "), "Techman-");
        assert_eq!(normalize_username("/u/Techman-"), "Techman-");
        assert_eq!(normalize_username("u/Techman-"), "Techman-");
    }
}
