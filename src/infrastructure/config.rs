//! Configuration management

use crate::domain::WeekStart;
use crate::error::{ImpactLogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the metadata directory at the log root
pub const META_DIR: &str = ".impactlog";

const DEFAULT_REVIEW_MONTHS: u32 = 3;

fn default_review_months() -> u32 {
    DEFAULT_REVIEW_MONTHS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Look-back window for `review` when no range is given
    #[serde(default = "default_review_months")]
    pub review_months: u32,
    #[serde(default)]
    pub week_starts_on: WeekStart,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            review_months: DEFAULT_REVIEW_MONTHS,
            week_starts_on: WeekStart::default(),
        }
    }

    /// Load config from .impactlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImpactLogError::NotImpactLogDirectory(path.to_path_buf())
            } else {
                ImpactLogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ImpactLogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .impactlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(meta_dir.join("config.toml"), contents)?;

        log::debug!("wrote config to {}", meta_dir.display());
        Ok(())
    }
}
