//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::config::CliConfig;

pub mod blocks;
pub mod convert;
pub mod generate_config;
pub mod latin;
pub mod list;
pub mod validate;

/// State shared by every command
#[derive(Debug, Default)]
pub struct AppContext {
    pub config: CliConfig,
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transliterate text into a historical script
    Convert(convert::ConvertArgs),

    /// Apply classical Latin orthography
    Latin(latin::LatinArgs),

    /// Replace or extract marked regions in documents
    Blocks(blocks::BlocksArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Validate a script table file
    Validate(validate::ValidateArgs),

    /// Write a configuration or script table template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Latin(args) => args.execute(),
            Commands::Blocks(args) => args.execute(ctx),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
