//! Plain text output

use super::OutputFormatter;
use anyhow::Result;
use runescript_core::Replacement;
use std::io::Write;

/// Writes `source:start [Marker] input => output` lines
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_replacement(&mut self, source: &str, replacement: &Replacement) -> Result<()> {
        writeln!(
            self.writer,
            "{}:{} [{}] {} => {}",
            source,
            replacement.start,
            replacement.marker,
            one_line(&replacement.input),
            one_line(&replacement.output)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Multi-line block content collapsed onto one line
fn one_line(s: &str) -> String {
    s.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}
