//! runescript CLI library
//!
//! This library provides the command-line interface for the runescript
//! transliteration engine.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod script_source;

pub use error::{CliError, CliResult};

use commands::{AppContext, Commands};
use config::CliConfig;

/// Transliterate Latin text into runic and Gothic scripts
#[derive(Debug, Parser)]
#[command(name = "runescript", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "RUNESCRIPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Initialize logging, load configuration and run the selected command
    pub fn run(self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let ctx = AppContext {
            config: CliConfig::load(self.config.as_deref())?,
            quiet: self.quiet,
        };
        self.command.execute(&ctx)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["runescript", "list", "scripts", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_convert_requires_script_or_table() {
        assert!(Cli::try_parse_from(["runescript", "convert", "thing"]).is_err());
        assert!(Cli::try_parse_from(["runescript", "convert", "--table", "t.toml", "x"]).is_ok());
    }

    #[test]
    fn test_blocks_marker_list() {
        let cli = Cli::try_parse_from([
            "runescript",
            "blocks",
            "-i",
            "doc.md",
            "--markers",
            "Futhorc,Gothic",
            "-x",
            "-f",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Blocks(args) => {
                assert_eq!(args.markers, vec!["Futhorc", "Gothic"]);
                assert!(args.extract);
                assert_eq!(args.format, Some(output::OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_in_place_conflicts_with_output() {
        assert!(Cli::try_parse_from([
            "runescript",
            "blocks",
            "-i",
            "doc.md",
            "--in-place",
            "-o",
            "out.md"
        ])
        .is_err());
    }
}
