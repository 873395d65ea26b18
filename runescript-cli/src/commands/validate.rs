//! Validate command implementation

use anyhow::Result;
use clap::Args;
use runescript_core::{MappingTable, ScriptConfig};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the script table to validate
    #[arg(short = 't', long, value_name = "FILE", required = true)]
    pub table: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Validating script table: {}", self.table.display())?;

        match ScriptConfig::from_file(&self.table) {
            Ok(config) => {
                let table = MappingTable::from_config(&config);
                let digraphs = table.digraphs();
                writeln!(out, "✓ Table is valid!")?;
                writeln!(out, "  Code: {}", config.metadata.code)?;
                writeln!(out, "  Name: {}", config.metadata.name)?;
                writeln!(out, "  Marker: {}", config.marker())?;
                writeln!(out, "  Mappings: {}", table.len())?;
                if !digraphs.is_empty() {
                    writeln!(out, "  Digraphs: {}", digraphs.join(", "))?;
                }
                Ok(())
            }
            Err(e) => {
                writeln!(out, "✗ Table is invalid!")?;
                writeln!(out, "  Error: {e}")?;
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
