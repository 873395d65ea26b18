//! JSON output

use super::OutputFormatter;
use anyhow::Result;
use runescript_core::{Replacement, ReplacementKind};
use serde::Serialize;
use std::io::Write;

/// Buffers every region and writes one JSON array on `finish`
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    regions: Vec<RegionData>,
}

#[derive(Debug, Serialize)]
pub struct RegionData {
    pub source: String,
    pub kind: ReplacementKind,
    pub marker: String,
    pub input: String,
    pub output: String,
    pub start: usize,
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            regions: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_replacement(&mut self, source: &str, replacement: &Replacement) -> Result<()> {
        self.regions.push(RegionData {
            source: source.to_string(),
            kind: replacement.kind,
            marker: replacement.marker.clone(),
            input: replacement.input.clone(),
            output: replacement.output.clone(),
            start: replacement.start,
            end: replacement.end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.regions)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.regions)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pretty: bool) -> serde_json::Value {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty);
            formatter
                .format_replacement(
                    "doc.md",
                    &Replacement {
                        kind: ReplacementKind::Line,
                        marker: "Gothic".to_string(),
                        input: "guth".to_string(),
                        output: "𐌲𐌿𐌸".to_string(),
                        start: 0,
                        end: 12,
                    },
                )
                .unwrap();
            formatter.finish().unwrap();
        }
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_json_fields() {
        let value = render(true);
        let region = &value[0];
        assert_eq!(region["source"], "doc.md");
        assert_eq!(region["kind"], "line");
        assert_eq!(region["marker"], "Gothic");
        assert_eq!(region["output"], "𐌲𐌿𐌸");
        assert_eq!(region["end"], 12);
    }

    #[test]
    fn test_compact_matches_pretty() {
        assert_eq!(render(false), render(true));
    }

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, false).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
