//! Configuration management for haul-bid
//!
//! Config stored at: ~/.config/haul-bid/config.json

use haulbid_types::{ConfigError, ExportFormat, OutputFormat, PayoutMode, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pricing used for tonnage jobs (fixed_payout, markup_percent)
    #[serde(default)]
    pub payout_mode: PayoutMode,

    /// Default terminal output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Default bid document format (xlsx, csv, json)
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Where bid documents are written when no path is given
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Company name printed on bids that do not name one
    #[serde(default)]
    pub company_name: Option<String>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haul-bid");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory for exported documents, falling back to the working directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haul Bid Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Payout mode:    {}", self.payout_mode)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Export format:  {}", self.export_format)?;
        writeln!(f, "Export dir:     {}", self.export_dir().display())?;
        writeln!(
            f,
            "Company name:   {}",
            self.company_name.as_deref().unwrap_or("(none)")
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
