//! Configuration management for the CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
///
/// Loaded from `~/.config/cws/config.json`, with `CWS_*` environment
/// variables taking precedence over file values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default region code for report headers
    pub default_region: Option<String>,
    /// Default workload profile key
    pub default_profile: Option<String>,
    /// Default output format ("table" or "json")
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Ok(path) = Self::config_path() {
            if path.exists() {
                builder = builder.add_source(config::File::from(path));
            }
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("CWS"))
            .build()?;

        Ok(settings.try_deserialize().unwrap_or_default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("cws").join("config.json"))
    }
}
