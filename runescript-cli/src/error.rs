//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// No input file matched
    #[error("No files found matching: {0}")]
    NoInputFiles(String),

    /// Invalid glob pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// CLI configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Script name that resolves to no built-in table
    #[error("Unknown script: {0} (see `runescript list scripts`)")]
    UnknownScript(String),

    /// `blocks --extract` found nothing to report
    #[error("no transliteration blocks found")]
    NoBlocksFound,

    /// Error from the transliteration engine
    #[error(transparent)]
    Core(#[from] runescript_core::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::NoInputFiles("*.md".to_string()).to_string(),
            "No files found matching: *.md"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("bad format".to_string()).to_string(),
            "Configuration error: bad format"
        );
        assert_eq!(
            CliError::NoBlocksFound.to_string(),
            "no transliteration blocks found"
        );
    }

    #[test]
    fn test_unknown_script_points_to_list() {
        let err = CliError::UnknownScript("ogham".to_string());
        assert!(err.to_string().contains("ogham"));
        assert!(err.to_string().contains("list scripts"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = runescript_core::Error::UnsupportedScript("x".to_string());
        let expected = core.to_string();
        let err: CliError = core.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_cli_result_downcast() {
        let failure: CliResult<()> = Err(CliError::NoBlocksFound.into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoBlocksFound)
        ));
    }
}
