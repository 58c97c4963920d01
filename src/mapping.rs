//! SnooNotes note type to Mod Notes label mapping
//!
//! The SnooNotes taxonomy is a closed set ([`SourceCategory`]) and every
//! member maps to exactly one [`DestinationLabel`] through an exhaustive
//! match. A category outside the set is an [`UnmappedTypeError`]; there is
//! no fallback label.

use crate::error::UnmappedTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mod Notes label accepted by Reddit
///
/// Serializes with Reddit's wire names (`ABUSE_WARNING`, `BAN`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationLabel {
    AbuseWarning,
    Ban,
    BotBan,
    HelpfulUser,
    PermaBan,
    SolidContributor,
    SpamWarning,
    SpamWatch,
}

impl DestinationLabel {
    /// Every label Reddit accepts
    pub const ALL: [DestinationLabel; 8] = [
        DestinationLabel::AbuseWarning,
        DestinationLabel::Ban,
        DestinationLabel::BotBan,
        DestinationLabel::HelpfulUser,
        DestinationLabel::PermaBan,
        DestinationLabel::SolidContributor,
        DestinationLabel::SpamWarning,
        DestinationLabel::SpamWatch,
    ];

    /// Name used by the Reddit API
    pub fn wire_name(self) -> &'static str {
        match self {
            DestinationLabel::AbuseWarning => "ABUSE_WARNING",
            DestinationLabel::Ban => "BAN",
            DestinationLabel::BotBan => "BOT_BAN",
            DestinationLabel::HelpfulUser => "HELPFUL_USER",
            DestinationLabel::PermaBan => "PERMA_BAN",
            DestinationLabel::SolidContributor => "SOLID_CONTRIBUTOR",
            DestinationLabel::SpamWarning => "SPAM_WARNING",
            DestinationLabel::SpamWatch => "SPAM_WATCH",
        }
    }

    /// Name shown in the Reddit moderator UI
    pub fn display_name(self) -> &'static str {
        match self {
            DestinationLabel::AbuseWarning => "Abuse Warning",
            DestinationLabel::Ban => "Ban",
            DestinationLabel::BotBan => "Bot Ban",
            DestinationLabel::HelpfulUser => "Helpful User",
            DestinationLabel::PermaBan => "Permanent Ban",
            DestinationLabel::SolidContributor => "Solid Contributor",
            DestinationLabel::SpamWarning => "Spam Warning",
            DestinationLabel::SpamWatch => "Spam Watch",
        }
    }
}

impl fmt::Display for DestinationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// SnooNotes note type with a Mod Notes counterpart
///
/// SnooNotes let each subreddit rename its types, but the defaults it
/// created (and the names almost every subreddit kept) are the ones below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCategory {
    AbuseWarning,
    Ban,
    GoodUser,
    HelpfulUser,
    PermaBan,
    SpamBan,
    SpamPerma,
    SpamWarn,
    SpamWatch,
}

impl SourceCategory {
    /// Destination label for this category
    pub fn label(self) -> DestinationLabel {
        match self {
            SourceCategory::AbuseWarning => DestinationLabel::AbuseWarning,
            SourceCategory::Ban => DestinationLabel::Ban,
            SourceCategory::GoodUser => DestinationLabel::SolidContributor,
            SourceCategory::HelpfulUser => DestinationLabel::HelpfulUser,
            SourceCategory::PermaBan => DestinationLabel::PermaBan,
            SourceCategory::SpamBan => DestinationLabel::BotBan,
            SourceCategory::SpamPerma => DestinationLabel::PermaBan,
            SourceCategory::SpamWarn => DestinationLabel::SpamWarning,
            SourceCategory::SpamWatch => DestinationLabel::SpamWatch,
        }
    }
}

impl FromStr for SourceCategory {
    type Err = UnmappedTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match category_key(s).as_str() {
            "abuse_warning" | "warning" => Ok(SourceCategory::AbuseWarning),
            "ban" => Ok(SourceCategory::Ban),
            "good_user" | "solid_contributor" => Ok(SourceCategory::GoodUser),
            "helpful_user" => Ok(SourceCategory::HelpfulUser),
            "perma_ban" | "permanent_ban" => Ok(SourceCategory::PermaBan),
            "spam_ban" | "bot_ban" => Ok(SourceCategory::SpamBan),
            "spam_perma" => Ok(SourceCategory::SpamPerma),
            "spam_warn" | "spam_warning" => Ok(SourceCategory::SpamWarn),
            "spam_watch" => Ok(SourceCategory::SpamWatch),
            // "Shadow Ban" has no Mod Notes counterpart
            _ => Err(UnmappedTypeError(s.to_string())),
        }
    }
}

/// Lowercase, with runs of spaces, `_` and `-` collapsed into one `_`
fn category_key(s: &str) -> String {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Map a SnooNotes category to its Mod Notes label
///
/// # Arguments
/// * `category` - Note type display name from the export
///
/// # Returns
/// The label, or an [`UnmappedTypeError`] carrying `category` verbatim
pub fn map_category(category: &str) -> Result<DestinationLabel, UnmappedTypeError> {
    category.parse::<SourceCategory>().map(SourceCategory::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snoonotes_types_map() {
        let expected = [
            ("Abuse Warning", DestinationLabel::AbuseWarning),
            ("Ban", DestinationLabel::Ban),
            ("Good User", DestinationLabel::SolidContributor),
            ("Perma Ban", DestinationLabel::PermaBan),
            ("Spam Ban", DestinationLabel::BotBan),
            ("Spam Perma", DestinationLabel::PermaBan),
            ("Spam Warn", DestinationLabel::SpamWarning),
            ("Spam Watch", DestinationLabel::SpamWatch),
        ];
        for (category, label) in expected {
            assert_eq!(map_category(category), Ok(label), "category {}", category);
        }
    }

    #[test]
    fn test_category_key_normalization() {
        assert_eq!(category_key("Abuse Warning"), "abuse_warning");
        assert_eq!(category_key("  SPAM-watch "), "spam_watch");
        assert_eq!(category_key("perma__ban"), "perma_ban");
        assert_eq!(category_key(""), "");
    }

    #[test]
    fn test_shadow_ban_is_unmapped() {
        assert_eq!(
            map_category("Shadow Ban"),
            Err(UnmappedTypeError("Shadow Ban".to_string()))
        );
    }

    #[test]
    fn test_label_wire_names_match_serde() {
        for label in DestinationLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.wire_name()));
        }
    }
}
