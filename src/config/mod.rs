//! Configuration system for pathquill.
//!
//! This module provides the configuration structure for pathquill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and may be overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use pathquill::config::{Config, OutputFormat};
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Yaml);
//! assert_eq!(config.indent_size, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialization format used when printing or saving a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Configuration for the pathquill application.
///
/// # Fields
///
/// * `output_format` - Format for printed and saved documents (default: yaml)
/// * `indent_size` - Number of spaces per indentation level for JSON output (default: 2)
/// * `create_backup` - Create .bak files before writing in place (default: false)
/// * `log_level` - Default log filter when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format for printed and saved documents
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Yaml
}

fn default_indent_size() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            indent_size: default_indent_size(),
            create_backup: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/pathquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("pathquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            log::warn!("{:#}", e);
            Self::default()
        })
    }

    /// Loads configuration from the default config file, reporting invalid files.
    ///
    /// A missing file (or home directory) yields the defaults.
    pub fn try_load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::try_load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file, reporting invalid files.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Ignoring invalid config {}", path.display()))
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to a specific file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
