//! Latin command implementation

use anyhow::Result;
use clap::Args;
use runescript_core::{to_classical_latin, to_classical_latin_extended};
use std::io::{self, Write};

use super::convert::write_text;
use crate::input::gather_sources;

/// Arguments for the latin command
#[derive(Debug, Args)]
pub struct LatinArgs {
    /// Also turn dashes into spaces and QU into QV
    #[arg(short, long)]
    pub extended: bool,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to convert; stdin is read when no text or input is given
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

impl LatinArgs {
    /// Execute the latin command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let transform: fn(&str) -> String = if self.extended {
            to_classical_latin_extended
        } else {
            to_classical_latin
        };

        for input in gather_sources(&self.text, &self.input)? {
            log::debug!("Converting {}", input.label());
            write_text(out, &transform(&input.text))?;
        }

        out.flush()?;
        Ok(())
    }
}
