//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use runescript_core::{list_scripts, Transform};
use std::io::{self, Write};

use crate::output::OutputFormat;

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in scripts
    Scripts,

    /// List markers recognized in documents
    Markers,

    /// List output formats for `blocks --extract`
    Formats,
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Scripts => {
                writeln!(out, "Available scripts:")?;
                for (id, transducer) in list_scripts() {
                    let digraphs = transducer.table().digraphs();
                    writeln!(
                        out,
                        "  {:<16} {:<22} marker: {:<15} digraphs: {}",
                        id.code(),
                        id.name(),
                        id.marker(),
                        if digraphs.is_empty() {
                            "none".to_string()
                        } else {
                            digraphs.join(", ")
                        }
                    )?;
                }
            }
            ListCommands::Markers => {
                writeln!(out, "Recognized markers:")?;
                for transform in Transform::all() {
                    let description = match transform {
                        Transform::Script(id) => id.name(),
                        Transform::ClassicalLatin => "Classical Latin",
                        Transform::ClassicalLatinExtended => "Classical Latin (extended)",
                    };
                    writeln!(out, "  {:<16} {}", transform.marker(), description)?;
                }
                writeln!(out)?;
                writeln!(out, "Use <Marker>...</Marker> or start a line with @marker")?;
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<10} - {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}
