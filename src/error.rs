//! Error types for impactlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for impactlog
#[derive(Debug, Error)]
pub enum ImpactLogError {
    #[error("Not an impactlog directory: {0}")]
    NotImpactLogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid date range: {0}")]
    InvalidDate(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Load failed: {0}")]
    LoadFailed(String),

    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ImpactLogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ImpactLogError::NotImpactLogDirectory(_) => 2,
            ImpactLogError::InvalidTimeReference(_) | ImpactLogError::InvalidDate(_) => 3,
            ImpactLogError::EntryNotFound(_) => 4,
            ImpactLogError::LoadFailed(_) => 5,
            ImpactLogError::SaveFailed(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ImpactLogError::NotImpactLogDirectory(path) => {
                format!(
                    "Not an impactlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'impactlog init' in this directory to start a work log\n\
                    • Navigate to an existing impactlog directory\n\
                    • Set IMPACTLOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            ImpactLogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-06-10)\n\n\
                    Examples:\n\
                    impactlog standup yesterday\n\
                    impactlog show last friday\n\
                    impactlog add --date 2024-06-10 --work \"Shipped search\"",
                    ref_str
                )
            }
            ImpactLogError::EntryNotFound(what) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'impactlog list' to see logged days and their ids\n\
                    • Log the day first with 'impactlog add'",
                    what
                )
            }
            ImpactLogError::LoadFailed(msg) => {
                format!(
                    "Load failed: {}\n\n\
                    The work log in .impactlog/logs.json could not be read.\n\
                    Check the file for manual edits or restore it from a backup.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ImpactLogError
pub type Result<T> = std::result::Result<T, ImpactLogError>;
