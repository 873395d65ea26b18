//! Convert command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::input::gather_sources;
use crate::script_source::ScriptSource;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Target script (code, marker or alias, e.g. futhorc, ElderFuthark, wulfila)
    #[arg(short, long, value_name = "SCRIPT", required_unless_present = "table")]
    pub script: Option<String>,

    /// Use a TOML script table instead of a built-in script
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to convert; stdin is read when no text or input is given
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let source = ScriptSource::from_args(self.script.as_deref(), self.table.as_ref())?;
        log::info!("Converting with {}", source.display_name());
        let transducer = source.load()?;

        for input in gather_sources(&self.text, &self.input)? {
            log::debug!("Converting {}", input.label());
            let converted = transducer.transliterate(&input.text);
            write_text(out, &converted)?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Write `text`, terminating it with a newline if it lacks one
pub(crate) fn write_text<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
