//! Markdown output

use super::OutputFormatter;
use anyhow::Result;
use runescript_core::Replacement;
use std::io::Write;

pub struct MarkdownFormatter<W: Write> {
    writer: W,
    region_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            region_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_replacement(&mut self, source: &str, replacement: &Replacement) -> Result<()> {
        self.region_count += 1;
        writeln!(
            self.writer,
            "{}. **{}** `{}` → {} *({}:{})*",
            self.region_count,
            replacement.marker,
            replacement.input.replace('\n', " "),
            replacement.output.replace('\n', " "),
            source,
            replacement.start
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total blocks: {}*", self.region_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
