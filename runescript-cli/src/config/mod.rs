//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Marker configuration
    #[serde(default)]
    pub markers: MarkersConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Which markers the `blocks` command recognizes
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MarkersConfig {
    /// Marker allow-list
    pub allowed: Vec<String>,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            allowed: runescript_core::default_markers()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format for `blocks --extract`
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for `--parallel` (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load and check a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject values the commands cannot use
    pub fn validate(&self) -> Result<(), CliError> {
        if self.markers.allowed.iter().any(|m| m.trim().is_empty()) {
            return Err(CliError::ConfigError(
                "markers.allowed contains an empty marker".to_string(),
            ));
        }
        self.default_format()?;
        Ok(())
    }

    /// Parsed `output.default_format`
    pub fn default_format(&self) -> Result<OutputFormat, CliError> {
        self.output.default_format.parse().map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
        })
    }

    /// Worker thread count, resolving 0 to the number of CPUs
    pub fn worker_threads(&self) -> usize {
        match self.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
