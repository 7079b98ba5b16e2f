// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::store::StoreOptions;
use anyhow::Result;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Reject events whose start is not strictly before their end.
    #[serde(default)]
    pub enforce_time_order: bool,
    /// Validate recurrence rules with the rrule parser (RFC 5545) on every write.
    #[serde(default)]
    pub strict_recurrence: bool,
    /// Overlap flag used by the controller's `*_default` helpers.
    #[serde(default)]
    pub allow_overlap_by_default: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enforce_time_order: false,
            strict_recurrence: false,
            allow_overlap_by_default: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from a TOML file.
    /// Returns a contextualized error if the file is missing, unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            enforce_time_order: self.enforce_time_order,
            strict_recurrence: self.strict_recurrence,
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", self.log_level))
    }
}
