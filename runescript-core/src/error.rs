//! Core error types
//!
//! Transliteration itself never fails; errors only arise while loading or
//! validating script tables and resolving script names.

use thiserror::Error;

/// Errors raised at the configuration boundary of the core
#[derive(Debug, Error)]
pub enum Error {
    /// Script table could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Script table parsed but breaks a table invariant
    #[error("Invalid script table '{code}': {reason}")]
    InvalidTable {
        /// Code of the offending table (may be empty)
        code: String,
        /// What is wrong with it
        reason: String,
    },

    /// Unknown script name, code or marker
    #[error("Unsupported script: {0}")]
    UnsupportedScript(String),

    /// I/O error while reading an external table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
