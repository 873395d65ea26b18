//! Script table selection for the CLI

use anyhow::Result;
use runescript_core::{ScriptConfig, ScriptId, Transducer};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::CliError;

/// Where a transducer's table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// One of the embedded tables
    BuiltIn(ScriptId),
    /// A TOML table on disk
    External(PathBuf),
}

impl ScriptSource {
    /// Pick the source from `--script` / `--table`, preferring the table
    pub fn from_args(script: Option<&str>, table: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = table {
            return Ok(ScriptSource::External(path.clone()));
        }
        let name = script.ok_or_else(|| {
            CliError::ConfigError("either --script or --table is required".to_string())
        })?;
        let id = name
            .parse::<ScriptId>()
            .map_err(|_| CliError::UnknownScript(name.to_string()))?;
        Ok(ScriptSource::BuiltIn(id))
    }

    /// Build or borrow the transducer
    pub fn load(&self) -> Result<Cow<'static, Transducer>> {
        match self {
            ScriptSource::BuiltIn(id) => Ok(Cow::Borrowed(runescript_core::transducer(*id))),
            ScriptSource::External(path) => {
                let config = ScriptConfig::from_file(path).map_err(CliError::from)?;
                log::info!(
                    "Loaded external table '{}' from {}",
                    config.metadata.code,
                    path.display()
                );
                Ok(Cow::Owned(Transducer::from_config(&config)))
            }
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            ScriptSource::BuiltIn(id) => format!("Built-in: {}", id.name()),
            ScriptSource::External(path) => format!("External: {}", path.display()),
        }
    }
}
