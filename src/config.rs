//! Configuration management for karat-checker
//!
//! Config stored at: ~/.config/karat-checker/config.json

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Supported currency codes
pub const CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "MXN", "JPY"];

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preferred currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Data directory override for the history and material stores
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            output_format: OutputFormat::default(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory on this system".to_string()))?
            .join("karat-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory for the history and material stores
    pub fn data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("karat-checker")
    }

    /// Load config from file; missing or corrupt files yield the defaults
    pub fn load() -> Self {
        Self::config_path()
            .ok()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Change the preferred currency; rejects codes outside `CURRENCIES`
    pub fn set_currency(&mut self, code: &str) -> Result<()> {
        let code = code.trim().to_uppercase();
        if !CURRENCIES.contains(&code.as_str()) {
            return Err(Error::Config(format!(
                "unsupported currency '{}' (supported: {})",
                code,
                CURRENCIES.join(", ")
            )));
        }
        self.currency = code;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Karat Checker Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Currency:       {}", self.currency)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Data dir:       {}", self.data_dir().display())?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
