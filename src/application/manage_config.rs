//! Config management use case

use crate::domain::WeekStart;
use crate::error::{ImpactLogError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "created, review_months, week_starts_on";

/// Service for managing work log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "created" => Ok(config.created.to_rfc3339()),
            "review_months" => Ok(config.review_months.to_string()),
            "week_starts_on" => Ok(config.week_starts_on.to_string()),
            _ => Err(ImpactLogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "review_months" => {
                let months: u32 = value.parse().map_err(|_| {
                    ImpactLogError::Config(format!(
                        "review_months must be a whole number of months, got '{}'",
                        value
                    ))
                })?;
                if months == 0 {
                    return Err(ImpactLogError::Config(
                        "review_months must be at least 1".to_string(),
                    ));
                }
                config.review_months = months;
            }
            "week_starts_on" => {
                config.week_starts_on = WeekStart::from_str(value).map_err(ImpactLogError::Config)?;
            }
            "created" => {
                return Err(ImpactLogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ImpactLogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: review_months, week_starts_on",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        log::debug!("set config {} = {}", key, value);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
