//! Importer configuration
//!
//! Read from an optional TOML file. Every key has a default, so an empty
//! file is a valid configuration:
//!
//! ```toml
//! max_note_length = 250
//! length_metric = "chars"     # chars | utf16 | bytes
//! failure_policy = "continue" # continue | stop
//! subreddit = "Techman"       # import everything into this subreddit
//! ```

use crate::convert::{ConvertOptions, DEFAULT_MAX_NOTE_LENGTH};
use crate::error::ConfigError;
use crate::split::LengthUnit;
use crate::submit::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mod Notes length limit
    pub max_note_length: usize,
    pub length_metric: LengthUnit,
    pub failure_policy: FailurePolicy,
    /// Overrides each note's own subreddit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_note_length: DEFAULT_MAX_NOTE_LENGTH,
            length_metric: LengthUnit::default(),
            failure_policy: FailurePolicy::default(),
            subreddit: None,
        }
    }
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_note_length == 0 {
            return Err(ConfigError::Invalid(
                "max_note_length must be greater than 0".to_string(),
            ));
        }
        if let Some(subreddit) = &self.subreddit
            && subreddit.trim().is_empty()
        {
            return Err(ConfigError::Invalid(
                "subreddit must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            max_note_length: self.max_note_length,
            length_unit: self.length_metric,
            subreddit: self
                .subreddit
                .as_deref()
                .map(|s| s.trim().trim_start_matches("/r/").trim_start_matches("r/").to_string()),
        }
    }
}
