//! Script table configuration
//!
//! This module defines the TOML schema for script mapping tables.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest source token a table may define, in characters
pub const MAX_KEY_CHARS: usize = 3;

/// Root script table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub metadata: Metadata,
    pub mappings: BTreeMap<String, String>,
}

/// Script metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Registry key, e.g. `futhorc`
    pub code: String,
    /// Human-readable name
    pub name: String,
    /// Canonical block marker, e.g. `Futhorc`
    #[serde(default)]
    pub marker: Option<String>,
    /// Additional lookup names
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ScriptConfig {
    /// Parse and validate a table from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ScriptConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a table file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Check the table invariants
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidTable {
            code: self.metadata.code.clone(),
            reason,
        };

        if self.metadata.code.trim().is_empty() {
            return Err(invalid("metadata.code is empty".to_string()));
        }

        if self.mappings.is_empty() {
            return Err(invalid("[mappings] table is empty".to_string()));
        }

        for (key, value) in &self.mappings {
            if key.is_empty() {
                return Err(invalid("empty mapping key".to_string()));
            }
            if key.chars().any(char::is_uppercase) {
                return Err(invalid(format!("mapping key '{key}' is not lowercase")));
            }
            if key.chars().count() > MAX_KEY_CHARS {
                return Err(invalid(format!(
                    "mapping key '{key}' is longer than {MAX_KEY_CHARS} characters"
                )));
            }
            if value.is_empty() {
                return Err(invalid(format!("empty value for key '{key}'")));
            }
        }

        Ok(())
    }

    /// Marker spelling, falling back to the name when none is configured
    pub fn marker(&self) -> &str {
        self.metadata
            .marker
            .as_deref()
            .unwrap_or(&self.metadata.name)
    }
}
